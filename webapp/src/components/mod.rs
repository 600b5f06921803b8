pub mod back_to_top;
pub mod contact;
pub mod navigation;
pub mod sections;
