//! Page and endpoint paths served by the application server.

pub const HOME: &str = "/";
pub const ROLE_CHOOSER: &str = "/admin-or-teamLeader-or-member";
pub const LOGOUT: &str = "/logout";

pub const ADMIN_OPTIONS: &str = "/admin-options";
pub const TEAM_LEADER_OPTIONS: &str = "/teamLeader-options";
pub const MEMBER_OPTIONS: &str = "/member-options";

pub const ADMIN_LOGIN: &str = "/admin-login";
pub const ADMIN_SIGNUP: &str = "/admin-signup";
pub const TEAM_LEADER_LOGIN: &str = "/teamLeader-login";
pub const TEAM_LEADER_SIGNUP: &str = "/teamLeader-signup";
pub const MEMBER_LOGIN: &str = "/member-login";
pub const MEMBER_SIGNUP: &str = "/member-signup";

pub const ADMIN_MAINPAGE: &str = "/admin-mainpage";
pub const TEAM_LEADER_MAINPAGE: &str = "/teamLeader-mainpage";
pub const MEMBER_MAINPAGE: &str = "/member-mainpage";

pub const MEMBER_TEAMS_INCLUDED: &str = "/member-teamsIncluded";
pub const MEMBER_PROJECTS: &str = "/member-projects";
pub const MEMBER_TASKS: &str = "/member-tasks";
pub const MEMBER_NOTIFICATIONS_AND_DEADLINES: &str = "/member-notifications_and_deadlines";

pub const ADMIN_MANAGE_USERS: &str = "/admin-manageUsers";
pub const ADMIN_MANAGE_TEAMS: &str = "/admin-manageTeams";
pub const ADMIN_SHOW_TASKS_AND_PROJECTS: &str = "/admin-show_tasks_and_projects";

pub const TEAM_LEADER_MANAGE_TEAMS: &str = "/teamLeader-manageTeams";
pub const TEAM_LEADER_MANAGE_TASKS_PROJECTS: &str = "/teamLeader-manageTasksProjects";

/// Placeholder substituted with the subject identifier in path templates.
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

pub const ACTIVATE_USER: &str = "/activate_user/{subject}";
pub const DEACTIVATE_USER: &str = "/deactivate_user/{subject}";
pub const CHANGE_ROLE: &str = "/change_role/{subject}";
pub const ADMIN_DELETE_TEAM: &str = "/admin-deleteTeam/{subject}";
pub const ADMIN_VIEW_TEAM: &str = "/admin-viewTeam/{subject}";
