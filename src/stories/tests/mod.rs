// src/stories/tests/mod.rs

mod text_tests;
