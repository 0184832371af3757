use app_shell::{AppShell, FallbackTable, RequirementRegistry, RouteDefinition, RouteTable};

#[allow(dead_code)]
pub(crate) const ENROLL_INTRODUCTION: &str = "/enroll/introduction";

/// Client template shell with the enrollment landing page and a few guarded
/// pages registered.
pub(crate) fn make_shell(name: &str) -> AppShell {
    let mut routes = RouteTable::client_template();
    routes.insert_route(
        ENROLL_INTRODUCTION,
        RouteDefinition::view("enroll/introduction"),
    );
    routes.insert_route(
        "/accounts/profile",
        RouteDefinition::guarded_view("accounts/profile", "logged"),
    );
    routes.insert_route(
        "/admin/users",
        RouteDefinition::guarded_view(
            "admin/users",
            app_shell::GuardRequest::from_names(["logged", "admin"]),
        ),
    );

    AppShell::new(
        name,
        RequirementRegistry::with_builtin(),
        routes,
        FallbackTable::with_builtin_defaults(),
    )
    .expect("shell configuration should validate")
}

#[allow(dead_code)]
pub(crate) fn drain_events(
    receiver: &mut tokio::sync::broadcast::Receiver<app_shell::NavigationEvent>,
) -> Vec<app_shell::NavigationEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        drained.push(event);
    }
    drained
}
