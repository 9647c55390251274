pub mod vehicles;
