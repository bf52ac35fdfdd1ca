pub mod element_model;
