//! The complete `(service, version) → adapter` table.

use geometry::ServiceTable;

use crate::{v0, v1, Connection};

/// Builds the table covering every adapter this crate provides.
pub fn service_table() -> ServiceTable<dyn Connection> {
    let mut table = ServiceTable::new();
    v0::register(&mut table);
    v1::register(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use geometry::{ProtocolVersion, ServiceKind};
    use std::sync::Arc;

    #[test]
    fn curves_exist_only_in_v1() {
        let table = service_table();
        assert_eq!(
            table.versions_for(ServiceKind::Curves),
            vec![ProtocolVersion::V1]
        );
    }

    #[test]
    fn rayfire_exists_only_in_v0() {
        let table = service_table();
        assert_eq!(
            table.versions_for(ServiceKind::Rayfire),
            vec![ProtocolVersion::V0]
        );
    }

    #[test]
    fn every_service_has_some_version() {
        let table = service_table();
        for kind in ServiceKind::ALL {
            assert!(
                !table.versions_for(*kind).is_empty(),
                "{kind} is unregistered"
            );
        }
        assert_eq!(table.services_for(ProtocolVersion::V0).len(), 18);
        assert_eq!(table.services_for(ProtocolVersion::V1).len(), 18);
        assert_eq!(table.len(), 36);
    }

    #[test]
    fn constructors_build_adapters_of_the_registered_version() {
        let table = service_table();
        let conn: Arc<dyn Connection> = Arc::new(ScriptedConnection::new());
        for version in ProtocolVersion::ALL {
            for kind in table.services_for(*version) {
                let build = table.constructor(kind, *version).unwrap();
                let handle = build(&conn);
                assert_eq!(handle.kind(), kind);
                assert_eq!(handle.protocol_version(), *version);
            }
        }
    }
}
