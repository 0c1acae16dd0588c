// ============================================================================
// NAVIGATION - routes, redirects and the session guard
// ============================================================================

use crate::models::Session;

/// Sections of the admin dashboard (`/admin/*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Activities,
    BloodRequirements,
    Volunteers,
    Attendance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Activities,
    BloodRequirements,
    Profile,
    MyAttendance,
    Admin(AdminSection),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Activities => "/activities",
            Route::BloodRequirements => "/blood-requirements",
            Route::Profile => "/profile",
            Route::MyAttendance => "/my-attendance",
            Route::Admin(AdminSection::Dashboard) => "/admin",
            Route::Admin(AdminSection::Activities) => "/admin/activities",
            Route::Admin(AdminSection::BloodRequirements) => "/admin/blood-requirements",
            Route::Admin(AdminSection::Volunteers) => "/admin/volunteers",
            Route::Admin(AdminSection::Attendance) => "/admin/attendance",
        }
    }

    /// Unknown paths resolve to `None`; unknown admin sections to the dashboard
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/activities" => Route::Activities,
            "/blood-requirements" => Route::BloodRequirements,
            "/profile" => Route::Profile,
            "/my-attendance" => Route::MyAttendance,
            "/admin" => Route::Admin(AdminSection::Dashboard),
            admin if admin.starts_with("/admin/") => Route::Admin(match &admin["/admin/".len()..] {
                "activities" => AdminSection::Activities,
                "blood-requirements" => AdminSection::BloodRequirements,
                "volunteers" => AdminSection::Volunteers,
                "attendance" => AdminSection::Attendance,
                _ => AdminSection::Dashboard,
            }),
            _ => return None,
        };
        Some(route)
    }

    /// Gate protecting this route, `None` for public pages
    pub fn guard_mode(&self) -> Option<GuardMode> {
        match self {
            Route::Profile | Route::MyAttendance => Some(GuardMode::Authenticated),
            Route::Admin(_) => Some(GuardMode::Admin),
            Route::Home | Route::Login | Route::Activities | Route::BloodRequirements => None,
        }
    }
}

/// Moves the active view somewhere else
pub trait Navigator {
    fn redirect(&self, route: Route);
}

/// Full page navigation through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ No window, cannot redirect to {}", route.path());
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            log::error!("❌ Redirect to {} failed: {:?}", route.path(), e);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode {
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

pub struct SessionGuard;

impl SessionGuard {
    /// Unauthenticated visitors go to the login page, authenticated ones
    /// without the admin role go home.
    pub fn check(mode: GuardMode, session: Option<&Session>) -> GuardDecision {
        match (mode, session) {
            (_, None) => GuardDecision::Redirect(Route::Login),
            (GuardMode::Authenticated, Some(_)) => GuardDecision::Allow,
            (GuardMode::Admin, Some(session)) if session.is_admin() => GuardDecision::Allow,
            (GuardMode::Admin, Some(_)) => GuardDecision::Redirect(Route::Home),
        }
    }

    pub fn check_route(route: Route, session: Option<&Session>) -> GuardDecision {
        match route.guard_mode() {
            Some(mode) => Self::check(mode, session),
            None => GuardDecision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session_with_role;
    use crate::models::Role;

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        assert_eq!(
            SessionGuard::check(GuardMode::Authenticated, None),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(SessionGuard::check(GuardMode::Admin, None), GuardDecision::Redirect(Route::Login));
    }

    #[test]
    fn volunteers_are_kept_out_of_admin() {
        let volunteer = session_with_role("u2", Role::Volunteer);
        assert_eq!(
            SessionGuard::check(GuardMode::Authenticated, Some(&volunteer)),
            GuardDecision::Allow
        );
        assert_eq!(
            SessionGuard::check(GuardMode::Admin, Some(&volunteer)),
            GuardDecision::Redirect(Route::Home)
        );

        let admin = session_with_role("u1", Role::Admin);
        assert_eq!(SessionGuard::check(GuardMode::Admin, Some(&admin)), GuardDecision::Allow);
    }

    #[test]
    fn parses_paths_and_modes() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/profile/"), Some(Route::Profile));
        assert_eq!(
            Route::from_path("/admin/volunteers?page=2"),
            Some(Route::Admin(AdminSection::Volunteers))
        );
        assert_eq!(Route::from_path("/admin/unknown"), Some(Route::Admin(AdminSection::Dashboard)));
        assert_eq!(Route::from_path("/nowhere"), None);

        assert_eq!(Route::Activities.guard_mode(), None);
        assert_eq!(Route::MyAttendance.guard_mode(), Some(GuardMode::Authenticated));
        assert_eq!(
            SessionGuard::check_route(Route::Admin(AdminSection::Attendance), None),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn every_route_path_parses_back() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Activities,
            Route::BloodRequirements,
            Route::Profile,
            Route::MyAttendance,
            Route::Admin(AdminSection::Dashboard),
            Route::Admin(AdminSection::Activities),
            Route::Admin(AdminSection::BloodRequirements),
            Route::Admin(AdminSection::Volunteers),
            Route::Admin(AdminSection::Attendance),
        ];
        for route in routes {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
