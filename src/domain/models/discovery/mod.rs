pub mod nearby_user;

pub use nearby_user::NearbyUser;
