pub mod a007_portfolio;
