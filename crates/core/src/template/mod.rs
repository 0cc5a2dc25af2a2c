pub mod delete_template;
pub mod duplicate_template;
pub mod publish_template;
