pub mod cities;
pub mod home;
pub mod map_view;
pub mod not_found;
pub mod view;

pub use cities::cities_page;
pub use home::home_page;
pub use map_view::map_page;
pub use not_found::not_found_page;
pub use view::view_page;
