pub mod empty_columns;
