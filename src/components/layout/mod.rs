pub mod portfolio_layout;

pub use portfolio_layout::PortfolioLayout;
