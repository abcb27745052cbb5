//! Trigger ids rendered by the server templates and where they lead

use contracts::system::routes;

use super::router::NavigationBinding;

pub const NAVIGATION_BINDINGS: &[NavigationBinding] = &[
    // main pages
    NavigationBinding::new("redirectButton_home", routes::HOME),
    NavigationBinding::new("redirect_to_home", routes::HOME), // id used by older templates
    NavigationBinding::new("redirectButton_admin_or_teamLeader_or_member", routes::ROLE_CHOOSER),
    NavigationBinding::new("redirectButton_logout", routes::LOGOUT),
    // options
    NavigationBinding::new("redirectButton_admin_options", routes::ADMIN_OPTIONS),
    NavigationBinding::new("redirectButton_teamLeader_options", routes::TEAM_LEADER_OPTIONS),
    NavigationBinding::new("redirectButton_member_options", routes::MEMBER_OPTIONS),
    // login / signup
    NavigationBinding::new("redirectButton_admin_login", routes::ADMIN_LOGIN),
    NavigationBinding::new("redirectButton_admin_signup", routes::ADMIN_SIGNUP),
    NavigationBinding::new("redirectButton_teamLeader_login", routes::TEAM_LEADER_LOGIN),
    NavigationBinding::new("redirectButton_teamLeader_signup", routes::TEAM_LEADER_SIGNUP),
    NavigationBinding::new("redirectButton_member_login", routes::MEMBER_LOGIN),
    NavigationBinding::new("redirectButton_member_signup", routes::MEMBER_SIGNUP),
    // role main pages
    NavigationBinding::new("redirectButton_admin_mainpage", routes::ADMIN_MAINPAGE),
    NavigationBinding::new("redirectButton_teamLeader_mainpage", routes::TEAM_LEADER_MAINPAGE),
    NavigationBinding::new("redirectButton_member_mainpage", routes::MEMBER_MAINPAGE),
    // member
    NavigationBinding::new("member_redirect_teams_included", routes::MEMBER_TEAMS_INCLUDED),
    NavigationBinding::new("member_redirect_projects", routes::MEMBER_PROJECTS),
    NavigationBinding::new("member_redirect_tasks", routes::MEMBER_TASKS),
    NavigationBinding::new(
        "member_redirect_notifications_and_deadlines",
        routes::MEMBER_NOTIFICATIONS_AND_DEADLINES,
    ),
    // admin
    NavigationBinding::new("admin_redirect_manageUsers", routes::ADMIN_MANAGE_USERS),
    NavigationBinding::new("admin_redirect_manageTeams", routes::ADMIN_MANAGE_TEAMS),
    NavigationBinding::new(
        "admin_redirect_show_tasks_and_projects",
        routes::ADMIN_SHOW_TASKS_AND_PROJECTS,
    ),
    // team leader
    NavigationBinding::new("teamLeader_redirect_manageTeams", routes::TEAM_LEADER_MANAGE_TEAMS),
    NavigationBinding::new(
        "teamLeader_redirect_manageTasksProjects",
        routes::TEAM_LEADER_MANAGE_TASKS_PROJECTS,
    ),
];
