use crate::{
    containers::layout::Layout,
    models::app_state::AppState,
    pages::*,
    session::{Access, Session, authorize, authorize_guest},
};
use shared::models::Role;
use strum::EnumIter;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The application routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/customer")]
    CustomerDashboard,
    #[at("/customer/vehicles")]
    Vehicles,
    #[at("/customer/appointments")]
    Appointments,
    #[at("/customer/appointments/new")]
    BookAppointment,
    #[at("/customer/invoices")]
    Invoices,
    #[at("/employee")]
    EmployeeDashboard,
    #[at("/employee/worklog")]
    WorkLog,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/appointments")]
    AdminAppointments,
    #[at("/admin/services")]
    AdminServices,
    #[at("/admin/employees")]
    AdminEmployees,
    #[at("/pay/success")]
    CheckoutSuccess,
    #[at("/pay/cancel")]
    CheckoutCancel,
    #[at("/pay/:invoice_id")]
    Checkout { invoice_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Rendered for everyone.
    Public,
    /// Sign-in and registration; signed-in users are sent home.
    GuestOnly,
    /// Signed-in users with one of these roles; empty means any role.
    Roles(&'static [Role]),
}

/// What the guard decided for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render,
    Redirect(MainRoute),
}

impl MainRoute {
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Home | Self::NotFound => RouteAccess::Public,
            Self::Login | Self::Register => RouteAccess::GuestOnly,
            Self::CustomerDashboard
            | Self::Vehicles
            | Self::Appointments
            | Self::BookAppointment
            | Self::Invoices => RouteAccess::Roles(&[Role::Customer]),
            Self::EmployeeDashboard | Self::WorkLog => RouteAccess::Roles(&[Role::Employee]),
            Self::AdminDashboard
            | Self::AdminAppointments
            | Self::AdminServices
            | Self::AdminEmployees => RouteAccess::Roles(&[Role::Admin]),
            Self::Checkout { .. } => RouteAccess::Roles(&[Role::Customer, Role::Admin]),
            Self::CheckoutSuccess | Self::CheckoutCancel => RouteAccess::Roles(&[]),
        }
    }

    /// Dashboard route for a role.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Customer => Self::CustomerDashboard,
            Role::Employee => Self::EmployeeDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }

    /// Header navigation entries for a role.
    pub fn nav_for(role: Role) -> Vec<Self> {
        match role {
            Role::Customer => vec![
                Self::CustomerDashboard,
                Self::Vehicles,
                Self::Appointments,
                Self::Invoices,
            ],
            Role::Employee => vec![Self::EmployeeDashboard, Self::WorkLog],
            Role::Admin => vec![
                Self::AdminDashboard,
                Self::AdminAppointments,
                Self::AdminServices,
                Self::AdminEmployees,
            ],
        }
    }

    /// Translation key of the route title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Home => "routes.home",
            Self::Login => "routes.login",
            Self::Register => "routes.register",
            Self::CustomerDashboard | Self::EmployeeDashboard | Self::AdminDashboard => {
                "routes.dashboard"
            }
            Self::Vehicles => "routes.vehicles",
            Self::Appointments | Self::AdminAppointments => "routes.appointments",
            Self::BookAppointment => "routes.book_appointment",
            Self::Invoices => "routes.invoices",
            Self::WorkLog => "routes.work_log",
            Self::AdminServices => "routes.services",
            Self::AdminEmployees => "routes.employees",
            Self::Checkout { .. } | Self::CheckoutSuccess | Self::CheckoutCancel => {
                "routes.checkout"
            }
            Self::NotFound => "routes.not_found",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            Self::CustomerDashboard | Self::EmployeeDashboard | Self::AdminDashboard => {
                IconId::HeroiconsOutlineHome
            }
            Self::Vehicles => IconId::HeroiconsOutlineTruck,
            Self::Appointments | Self::AdminAppointments | Self::BookAppointment => {
                IconId::HeroiconsOutlineCalendarDays
            }
            Self::Invoices | Self::Checkout { .. } => IconId::HeroiconsOutlineCreditCard,
            Self::WorkLog => IconId::HeroiconsOutlineClock,
            Self::AdminServices => IconId::HeroiconsOutlineWrenchScrewdriver,
            Self::AdminEmployees => IconId::HeroiconsOutlineUserGroup,
            _ => IconId::HeroiconsOutlineDocumentText,
        }
    }

    /// Decide whether this route renders for `session` or where to send the user instead.
    pub fn resolve(&self, session: Option<&Session>) -> Resolution {
        if *self == Self::Home {
            return Resolution::Redirect(
                session.map_or(Self::Login, |session| Self::home_for(session.role)),
            );
        }
        let access = match self.access() {
            RouteAccess::Public => Access::Granted,
            RouteAccess::GuestOnly => authorize_guest(session),
            RouteAccess::Roles(roles) => authorize(session, roles),
        };
        match access {
            Access::Granted => Resolution::Render,
            Access::RedirectToLogin => Resolution::Redirect(Self::Login),
            Access::RedirectHome(role) => Resolution::Redirect(Self::home_for(role)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let state = use_selector(|state: &AppState| state.clone());
    if !state.restored {
        return html! { <crate::components::loading::Loading /> };
    }

    let route = props.route.clone();
    match route.resolve(state.session.as_ref()) {
        Resolution::Redirect(target) => {
            log::debug!("redirecting {route:?} -> {target:?}");
            html! { <Redirect<MainRoute> to={target} /> }
        }
        Resolution::Render => render(route),
    }
}

fn render(route: MainRoute) -> Html {
    let page = match route.clone() {
        MainRoute::Login => return html! { <LoginPage /> },
        MainRoute::Register => return html! { <RegisterPage /> },
        MainRoute::Home | MainRoute::NotFound => html! { <ErrorPage /> },
        MainRoute::CustomerDashboard => html! { <CustomerDashboardPage /> },
        MainRoute::Vehicles => html! { <VehiclesPage /> },
        MainRoute::Appointments => html! { <AppointmentsPage /> },
        MainRoute::BookAppointment => html! { <BookAppointmentPage /> },
        MainRoute::Invoices => html! { <InvoicesPage /> },
        MainRoute::EmployeeDashboard => html! { <EmployeeDashboardPage /> },
        MainRoute::WorkLog => html! { <WorkLogPage /> },
        MainRoute::AdminDashboard => html! { <AdminDashboardPage /> },
        MainRoute::AdminAppointments => html! { <AdminAppointmentsPage /> },
        MainRoute::AdminServices => html! { <AdminServicesPage /> },
        MainRoute::AdminEmployees => html! { <AdminEmployeesPage /> },
        MainRoute::Checkout { invoice_id } => html! { <CheckoutPage {invoice_id} /> },
        MainRoute::CheckoutSuccess => html! { <CheckoutResultPage success={true} /> },
        MainRoute::CheckoutCancel => html! { <CheckoutResultPage success={false} /> },
    };
    html! {
        <Layout current_route={route}>
            {page}
        </Layout>
    }
}

/// Switch function for the application routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route: {route:?}");
    html! { <MainRouteView {route} /> }
}
