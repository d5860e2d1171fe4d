pub mod achievements;
pub mod admin;
pub mod assignments;
pub mod courses;
pub mod dashboard;
pub mod live_classes;
pub mod login;
pub mod messages;
pub mod not_found;
pub mod profile;
pub mod schedule;
pub mod settings;
pub mod tutor;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdFileText, LdGraduationCap, LdLayoutDashboard,
    LdMessageSquare, LdPlay, LdSearch, LdSettings, LdShield, LdTrendingUp, LdTrophy, LdUpload,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use platform::{build_navigation, decide, is_active, NavBadge, NavIcon, RouteDecision};
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, Switch, SwitchThumb,
};

use crate::auth::{use_auth, use_directory, use_role};
use crate::ProfileState;

use achievements::Achievements;
use assignments::Assignments;
use dashboard::Dashboard;
use live_classes::LiveClasses;
use login::Login;
use messages::Messages;
use not_found::NotFound;
use profile::Profile;
use schedule::Schedule;
use settings::Settings;

/// Application routes. Everything inside the `AuthGuard` layout is
/// protected; `/login` and the catch-all are public.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/courses")]
    CourseList {},
    #[route("/courses/:course_id")]
    CourseDetail { course_id: String },
    #[route("/assignments")]
    Assignments {},
    #[route("/schedule")]
    Schedule {},
    #[route("/live-classes")]
    LiveClasses {},
    #[route("/achievements")]
    Achievements {},
    #[route("/messages")]
    Messages {},
    // ── Tutor ──
    #[route("/tutor/courses")]
    TutorCourses {},
    #[route("/tutor/create-course")]
    CreateCourse {},
    #[route("/tutor/students")]
    TutorStudents {},
    #[route("/tutor/live-classes")]
    TutorLiveClasses {},
    #[route("/tutor/assignments")]
    TutorAssignments {},
    #[route("/tutor/analytics")]
    TutorAnalytics {},
    // ── Admin ──
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/courses")]
    AdminCourses {},
    #[route("/admin/tutors")]
    AdminTutors {},
    #[route("/admin/students")]
    AdminStudents {},
    #[route("/admin/analytics")]
    AdminAnalytics {},
    #[route("/admin/subscriptions")]
    AdminSubscriptions {},
    #[route("/admin/settings")]
    AdminSettings {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Redirects to /login when no identity is present.
///
/// The decision itself lives in `platform::guard` and is a pure function of
/// (identity presence, path); this component only applies it. The redirect
/// replaces the history entry so back-navigation cannot land on the
/// protected view. Navigation is never built before this decision runs.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    let user = auth.current_user();
    match decide(user.as_ref(), &route.to_string()) {
        RouteDecision::Render => rsx! { Outlet::<Route> {} },
        RouteDecision::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::PlayCircle => rsx! { Icon::<LdPlay> { icon: LdPlay, width: 18, height: 18 } },
        NavIcon::Trophy => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 18, height: 18 } },
        NavIcon::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Upload => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::BarChart => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        NavIcon::GraduationCap => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
        NavIcon::UserCheck => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Typed route for a navigation entry path. The builder only emits paths
/// this table knows about; anything else lands on the dashboard.
fn route_for(path: &str) -> Route {
    match path {
        "/" => Route::Dashboard {},
        "/courses" => Route::CourseList {},
        "/assignments" => Route::Assignments {},
        "/schedule" => Route::Schedule {},
        "/live-classes" => Route::LiveClasses {},
        "/achievements" => Route::Achievements {},
        "/messages" => Route::Messages {},
        "/tutor/courses" => Route::TutorCourses {},
        "/tutor/create-course" => Route::CreateCourse {},
        "/tutor/students" => Route::TutorStudents {},
        "/tutor/live-classes" => Route::TutorLiveClasses {},
        "/tutor/assignments" => Route::TutorAssignments {},
        "/tutor/analytics" => Route::TutorAnalytics {},
        "/admin" => Route::AdminDashboard {},
        "/admin/users" => Route::AdminUsers {},
        "/admin/courses" => Route::AdminCourses {},
        "/admin/tutors" => Route::AdminTutors {},
        "/admin/students" => Route::AdminStudents {},
        "/admin/analytics" => Route::AdminAnalytics {},
        "/admin/subscriptions" => Route::AdminSubscriptions {},
        "/admin/settings" => Route::AdminSettings {},
        "/settings" => Route::Settings {},
        _ => Route::Dashboard {},
    }
}

fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Student => BadgeVariant::Secondary,
        Role::Tutor => BadgeVariant::Primary,
        Role::Admin => BadgeVariant::Destructive,
    }
}

/// Main app layout with the role-conditioned sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let mut auth = use_auth();
    let directory = use_directory();

    // The guard has already run: inside this layout an identity is always
    // present, so the menu is built from a concrete role.
    let role = use_role().unwrap_or_default();
    let entries = build_navigation(role);
    let current_path = route.to_string();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        is_dark: Signal::new(false),
    });

    let unread = platform::navigation::UNREAD_MESSAGE_COUNT;

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::CourseList {} | Route::CourseDetail { .. } => "Courses",
        Route::Assignments {} => "Assignments",
        Route::Schedule {} => "Schedule",
        Route::LiveClasses {} => "Live Classes",
        Route::Achievements {} => "Achievements",
        Route::Messages {} => "Messages",
        Route::TutorCourses {} => "My Courses",
        Route::CreateCourse {} => "Create Course",
        Route::TutorStudents {} => "Students",
        Route::TutorLiveClasses {} => "Live Classes",
        Route::TutorAssignments {} => "Assignments",
        Route::TutorAnalytics {} => "Analytics",
        Route::AdminDashboard {} => "Admin Dashboard",
        Route::AdminUsers {} => "Users",
        Route::AdminCourses {} => "Courses",
        Route::AdminTutors {} => "Tutors",
        Route::AdminStudents {} => "Students",
        Route::AdminAnalytics {} => "Analytics",
        Route::AdminSubscriptions {} => "Subscriptions",
        Route::AdminSettings {} => "System Settings",
        Route::Profile {} => "Profile",
        Route::Settings {} => "Settings",
        Route::Login {} => "Sign In",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "Skillora" }
                    }
                    Badge { variant: role_badge_variant(role), "{role.display_name()}" }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for entry in entries {
                            SidebarMenuItem { key: "{entry.path}",
                                Link { to: route_for(entry.path),
                                    SidebarMenuButton { active: is_active(entry.path, &current_path),
                                        {nav_icon(entry.icon)}
                                        span { class: "nav-label", "{entry.label}" }
                                        {match entry.badge {
                                            Some(NavBadge::Count(count)) => rsx! {
                                                Badge { class: "nav-badge", "{count}" }
                                            },
                                            Some(NavBadge::Dot) => rsx! {
                                                span { class: "nav-dot" }
                                            },
                                            None => rsx! {},
                                        }}
                                    }
                                }
                            }
                        }
                    }

                    if role == Role::Student {
                        WeeklyStats {}
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark Mode" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        // Cosmetic search; there is no search backend.
                        div { class: "navbar-search",
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            input {
                                class: "navbar-search-input",
                                placeholder: "Search courses, instructors...",
                            }
                        }

                        Link { to: Route::Messages {}, class: "navbar-icon-button",
                            Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 }
                            Badge { class: "navbar-icon-badge", "{unread}" }
                        }

                        button { class: "navbar-icon-button",
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            span { class: "nav-dot" }
                        }

                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    if let Some(url) = profile.avatar_url.read().as_ref() {
                                        AvatarImage { src: url.clone() }
                                    }
                                    AvatarFallback {
                                        {profile.display_name.read().split_whitespace().filter_map(|w| w.chars().next()).take(2).collect::<String>().to_uppercase()}
                                    }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "profile".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        navigator().push(Route::Profile {});
                                    },
                                    "Profile"
                                }
                                DropdownMenuItem::<String> {
                                    value: "settings".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        navigator().push(Route::Settings {});
                                    },
                                    "Settings"
                                }
                                DropdownMenuSeparator {}
                                // Demo identity switcher over the fixed directory.
                                for (offset, user) in directory.users().iter().cloned().enumerate() {
                                    DropdownMenuItem::<String> {
                                        value: user.id.clone(),
                                        index: 2usize + offset,
                                        on_select: {
                                            let id = user.id.clone();
                                            move |_: String| {
                                                if auth.switch_identity(&id).is_ok() {
                                                    navigator().push(Route::Dashboard {});
                                                }
                                            }
                                        },
                                        "Switch to {user.name} ({user.role.display_name()})"
                                    }
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 2usize + directory.users().len(),
                                    on_select: move |_: String| {
                                        auth.logout();
                                        navigator().push(Route::Login {});
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Static weekly-progress block shown to students under the menu.
#[component]
fn WeeklyStats() -> Element {
    rsx! {
        div { class: "weekly-stats",
            h4 { "This Week" }
            div { class: "weekly-stats-row",
                span { class: "weekly-stats-label", "Learning Time" }
                span { "12h 30m" }
            }
            div { class: "weekly-stats-row",
                span { class: "weekly-stats-label", "Completed" }
                span { "8 lessons" }
            }
            div { class: "weekly-stats-row",
                span { class: "weekly-stats-label", "Streak" }
                span { "5 days" }
            }
        }
    }
}

// Route components that delegate into page modules.

#[component]
fn CourseList() -> Element {
    courses::list::CourseListPage()
}

#[component]
fn CourseDetail(course_id: String) -> Element {
    rsx! { courses::detail::CourseDetailPage { course_id: course_id } }
}

#[component]
fn TutorCourses() -> Element {
    tutor::courses::TutorCoursesPage()
}

#[component]
fn CreateCourse() -> Element {
    tutor::create_course::CreateCoursePage()
}

#[component]
fn TutorStudents() -> Element {
    tutor::students::TutorStudentsPage()
}

#[component]
fn TutorLiveClasses() -> Element {
    tutor::live_classes::TutorLiveClassesPage()
}

#[component]
fn TutorAssignments() -> Element {
    tutor::assignments::TutorAssignmentsPage()
}

#[component]
fn TutorAnalytics() -> Element {
    tutor::analytics::TutorAnalyticsPage()
}

#[component]
fn AdminDashboard() -> Element {
    admin::dashboard::AdminDashboardPage()
}

#[component]
fn AdminUsers() -> Element {
    admin::users::AdminUsersPage()
}

#[component]
fn AdminCourses() -> Element {
    admin::courses::AdminCoursesPage()
}

#[component]
fn AdminTutors() -> Element {
    admin::tutors::AdminTutorsPage()
}

#[component]
fn AdminStudents() -> Element {
    admin::students::AdminStudentsPage()
}

#[component]
fn AdminAnalytics() -> Element {
    admin::analytics::AdminAnalyticsPage()
}

#[component]
fn AdminSubscriptions() -> Element {
    admin::subscriptions::AdminSubscriptionsPage()
}

#[component]
fn AdminSettings() -> Element {
    admin::settings::AdminSettingsPage()
}
