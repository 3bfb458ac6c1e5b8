mod enumerate;
mod layout;
mod locate;

pub use enumerate::enumerate_environment;
pub use layout::DotnetLayout;
pub use locate::{default_install_roots, locate_dotnet_root, DOTNET_ROOT_ENV};

#[cfg(test)]
mod tests;
