pub mod list;
pub mod record;

// Re-export handler functions for use in routing
pub use list::get as list_get;
pub use list::post as list_post;
pub use list::visited as visited_get;

pub use record::delete as record_delete;
pub use record::get as record_get;
pub use record::review as record_review;
pub use record::visit as record_visit;
