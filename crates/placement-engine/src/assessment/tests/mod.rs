mod common;
mod routing;
mod scorer;
