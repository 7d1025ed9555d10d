mod common;
mod generator;
mod routing;
