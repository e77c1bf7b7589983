mod banner;

pub use banner::BannerState;
