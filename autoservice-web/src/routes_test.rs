//! Tests for the routing system
//!
//! Validates path recognition and the role gate every route passes through.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, Resolution, RouteAccess};
    use crate::session::Session;
    use crate::session::tests::user;
    use shared::models::Role;
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use yew_router::Routable;

    fn session(role: Role) -> Session {
        Session {
            token: "token".to_string(),
            user: user(role.as_str()),
            role,
        }
    }

    #[test_case("/", Some(MainRoute::Home))]
    #[test_case("/customer/appointments/new", Some(MainRoute::BookAppointment))]
    #[test_case("/employee/worklog", Some(MainRoute::WorkLog))]
    #[test_case("/admin/services", Some(MainRoute::AdminServices))]
    #[test_case("/pay/success", Some(MainRoute::CheckoutSuccess))]
    #[test_case("/pay/cancel", Some(MainRoute::CheckoutCancel))]
    fn recognizes_paths(path: &str, expected: Option<MainRoute>) {
        assert_eq!(MainRoute::recognize(path), expected);
    }

    #[test]
    fn checkout_path_carries_invoice_id() {
        let id = "5f0c2b8e-6a3f-4b7a-9e43-0d3c1e2a4b5c";
        assert_eq!(
            MainRoute::recognize(&format!("/pay/{id}")),
            Some(MainRoute::Checkout {
                invoice_id: id.to_string()
            })
        );
        assert_eq!(
            MainRoute::Checkout {
                invoice_id: id.to_string()
            }
            .to_path(),
            format!("/pay/{id}")
        );
    }

    #[test]
    fn home_sends_visitors_to_their_dashboard() {
        assert_eq!(
            MainRoute::Home.resolve(None),
            Resolution::Redirect(MainRoute::Login)
        );
        assert_eq!(
            MainRoute::Home.resolve(Some(&session(Role::Employee))),
            Resolution::Redirect(MainRoute::EmployeeDashboard)
        );
    }

    #[test_case(MainRoute::Vehicles, Role::Customer, Resolution::Render)]
    #[test_case(MainRoute::Vehicles, Role::Admin, Resolution::Redirect(MainRoute::AdminDashboard))]
    #[test_case(MainRoute::WorkLog, Role::Customer, Resolution::Redirect(MainRoute::CustomerDashboard))]
    #[test_case(MainRoute::AdminEmployees, Role::Employee, Resolution::Redirect(MainRoute::EmployeeDashboard))]
    #[test_case(MainRoute::Checkout { invoice_id: "x".to_string() }, Role::Admin, Resolution::Render)]
    #[test_case(MainRoute::Checkout { invoice_id: "x".to_string() }, Role::Employee, Resolution::Redirect(MainRoute::EmployeeDashboard))]
    #[test_case(MainRoute::CheckoutSuccess, Role::Employee, Resolution::Render)]
    #[test_case(MainRoute::Login, Role::Customer, Resolution::Redirect(MainRoute::CustomerDashboard))]
    fn signed_in_gate(route: MainRoute, role: Role, expected: Resolution) {
        assert_eq!(route.resolve(Some(&session(role))), expected);
    }

    #[test]
    fn anonymous_visitors_only_see_public_and_guest_routes() {
        for route in MainRoute::iter().filter(|route| *route != MainRoute::Home) {
            let resolution = route.resolve(None);
            match route.access() {
                RouteAccess::Public | RouteAccess::GuestOnly => {
                    assert_eq!(resolution, Resolution::Render, "{route:?}");
                }
                RouteAccess::Roles(_) => {
                    assert_eq!(
                        resolution,
                        Resolution::Redirect(MainRoute::Login),
                        "{route:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn navigation_only_lists_reachable_routes() {
        for role in Role::iter() {
            let signed_in = session(role);
            let nav = MainRoute::nav_for(role);
            assert_eq!(nav.first(), Some(&MainRoute::home_for(role)));
            for route in nav {
                assert_eq!(
                    route.resolve(Some(&signed_in)),
                    Resolution::Render,
                    "{role} cannot open {route:?}"
                );
            }
        }
    }

    #[test]
    fn dashboard_paths_match_role_home_paths() {
        for role in Role::iter() {
            assert_eq!(MainRoute::home_for(role).to_path(), role.home_path());
        }
    }
}
