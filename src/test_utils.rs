#[cfg(test)]
pub mod fixtures {
    use crate::facts::{
        Component, GuardedComponent, PackageFacts, PathPermission, ProviderComponent,
        ReceiverComponent,
    };

    pub fn package(name: &str) -> PackageFacts {
        PackageFacts {
            package: name.to_string(),
            filename: format!("/system/app/{name}/{name}.apk"),
            ..Default::default()
        }
    }

    pub fn activity(name: &str, permission: &str) -> Component {
        Component::Activity(GuardedComponent {
            name: name.to_string(),
            permission: permission.to_string(),
        })
    }

    pub fn service(name: &str, permission: &str) -> Component {
        Component::Service(GuardedComponent {
            name: name.to_string(),
            permission: permission.to_string(),
        })
    }

    pub fn receiver_component(name: &str, actions: &[&str], permission: &str) -> ReceiverComponent {
        ReceiverComponent {
            name: name.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
            permission: permission.to_string(),
        }
    }

    pub fn receiver(name: &str, actions: &[&str], permission: &str) -> Component {
        Component::Receiver(receiver_component(name, actions, permission))
    }

    pub fn provider(
        name: &str,
        permission: &str,
        read_permission: &str,
        write_permission: &str,
        path_permissions: Vec<PathPermission>,
    ) -> ProviderComponent {
        ProviderComponent {
            name: name.to_string(),
            permission: permission.to_string(),
            read_permission: read_permission.to_string(),
            write_permission: write_permission.to_string(),
            path_permissions,
        }
    }

    pub fn path_permission(
        permission: &str,
        read_permission: &str,
        write_permission: &str,
    ) -> PathPermission {
        PathPermission {
            path_prefix: "/".to_string(),
            permission: permission.to_string(),
            read_permission: read_permission.to_string(),
            write_permission: write_permission.to_string(),
            ..Default::default()
        }
    }
}
