//! User profiles: a visitor has an ip and a timestamp, a registered user
//! also has a name.

use std::fmt;

use chrono::{DateTime, Local};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::builder::{BuildSteps, Builder};

pub const DEFAULT_USER_NAME: &str = "Andre";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Fields start unset and are only ever set by a `UserBuilder` step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    ip: Option<f64>,
    datetime: Option<DateTime<Local>>,
    name: Option<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        UserProfile::default()
    }

    pub fn ip(&self) -> Option<f64> {
        self.ip
    }

    pub fn datetime(&self) -> Option<DateTime<Local>> {
        self.datetime
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.name.is_some()
    }

    /// Prints the profile to stdout, one field per line.
    pub fn show_user(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            Some(ip) => write!(f, " Ip: {};", ip)?,
            None => write!(f, " Ip: None;")?,
        }
        match self.datetime {
            Some(dt) => write!(f, "\n Data-Hora: {}", dt.format(TIMESTAMP_FORMAT))?,
            None => write!(f, "\n Data-Hora: None")?,
        }
        if let Some(name) = &self.name {
            write!(f, ";\n Nome: {}", name)?;
        }
        Ok(())
    }
}

/// Step A draws an ip in `[0, 100)`, step B stamps the current local time,
/// step C sets the name. Repeating a step overwrites its field.
#[derive(Debug)]
pub struct UserBuilder<R = ThreadRng> {
    product: UserProfile,
    rng: R,
}

impl UserBuilder<ThreadRng> {
    pub fn new() -> Self {
        UserBuilder::with_rng(rand::thread_rng())
    }
}

impl Default for UserBuilder<ThreadRng> {
    fn default() -> Self {
        UserBuilder::new()
    }
}

impl<R: Rng> UserBuilder<R> {
    /// Uses `rng` for the ip drawn by step A. Any `Rng` works, e.g. a seeded `StdRng`.
    pub fn with_rng(rng: R) -> Self {
        UserBuilder {
            product: UserProfile::new(),
            rng,
        }
    }
}

impl<R: Rng> BuildSteps for UserBuilder<R> {
    fn produce_part_a(&mut self) {
        let ip = self.rng.gen_range(0.0..100.0);
        debug!(ip, "setting user ip");
        self.product.ip = Some(ip);
    }

    fn produce_part_b(&mut self) {
        let now = Local::now();
        debug!(datetime = %now, "setting user timestamp");
        self.product.datetime = Some(now);
    }

    fn produce_part_c(&mut self) {
        debug!(name = DEFAULT_USER_NAME, "setting user name");
        self.product.name = Some(DEFAULT_USER_NAME.to_string());
    }
}

impl<R: Rng> Builder for UserBuilder<R> {
    type Product = UserProfile;

    fn retrieve_product(&mut self) -> UserProfile {
        debug!(registered = self.product.is_registered(), "retrieving user profile");
        std::mem::take(&mut self.product)
    }

    fn reset(&mut self) {
        debug!("resetting user builder");
        self.product = UserProfile::new();
    }
}
