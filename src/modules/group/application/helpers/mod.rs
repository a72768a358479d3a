mod group_access;

pub use group_access::{
    active_group, load_group, require_manager, require_owner, GroupAccessError,
};
