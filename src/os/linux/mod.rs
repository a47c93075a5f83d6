mod binding;
mod ifaddrs;
mod socket;

pub(crate) mod ethernet;
pub(crate) mod interface;
pub(crate) mod wireless;
