use crate::types::ServerId;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fresh, stable identity for a newly added server.
pub fn new_server_id() -> ServerId {
    ServerId::new(new_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn server_ids_are_unique() {
        assert_ne!(new_server_id(), new_server_id());
    }

    #[test]
    fn server_id_wraps_uuid() {
        let id = new_server_id();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }
}
