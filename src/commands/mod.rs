pub mod template;
pub mod server;
pub mod component;

pub use template::handle_template_command;
pub use server::handle_server_command;
pub use component::handle_component_command;
