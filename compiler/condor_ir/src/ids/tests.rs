use super::*;

#[test]
fn node_id_maps_to_zero_based_index() {
    let id = NodeId::new(1);
    assert!(id.is_valid());
    assert_eq!(id.index(), 0);
    assert_eq!(NodeId::new(42).index(), 41);
}

#[test]
fn invalid_node_id() {
    assert!(!NodeId::INVALID.is_valid());
    assert!(!NodeId::default().is_valid());
    assert_eq!(format!("{:?}", NodeId::INVALID), "NodeId::INVALID");
}

#[test]
fn node_ids_order_by_allocation() {
    assert!(NodeId::new(3) < NodeId::new(4));
}

#[test]
fn global_scope() {
    assert!(ScopeId::GLOBAL.is_global());
    assert!(!ScopeId::new(2).is_global());
    assert_eq!(ScopeId::default(), ScopeId::NONE);
    assert_eq!(ScopeId::new(3).to_string(), "s3");
}

#[test]
fn handle_sizes() {
    assert_eq!(std::mem::size_of::<NodeId>(), 4);
    assert_eq!(std::mem::size_of::<ScopeId>(), 4);
    assert_eq!(std::mem::size_of::<Option<ListItemId>>(), 8);
}
