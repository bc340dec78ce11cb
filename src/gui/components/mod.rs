// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod nav_panel;
pub mod sentiment;
pub mod stat_cards;
pub mod trend_chart;
