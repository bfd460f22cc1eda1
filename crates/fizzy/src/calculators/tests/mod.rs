mod common;
mod guard;
mod routing;
