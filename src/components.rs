pub mod collection_list_item;
pub mod cover;
pub mod record_details;
pub mod type_list;
