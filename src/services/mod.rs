pub mod points_service;
pub mod subscription_service;

pub use points_service::PointsService;
pub use subscription_service::SubscriptionService;
