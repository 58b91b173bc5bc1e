#![allow(dead_code)]

pub mod link_server;
