// src/gui/components/mod.rs
pub mod action_bar;
pub mod chart_view;
pub mod data_table;
pub mod report_view;
pub mod tabs;
