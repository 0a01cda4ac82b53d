pub mod still_controller;
