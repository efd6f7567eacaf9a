//! The in-process navigation contract.
//!
//! The presentation layer requests a transition to a named screen; the request
//! is fire-and-forget with no return value and no failure mode. The core only
//! needs the [`Navigator`] trait: production wiring logs requests via tracing,
//! while tests record them for assertions.

use std::fmt::Display;
use std::sync::Mutex;
use tracing::info;

/// The named screens of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Menu,
    Order,
    Favorites,
    Profile,
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Menu => "menu",
            Screen::Order => "order",
            Screen::Favorites => "favorites",
            Screen::Profile => "profile",
        };
        write!(f, "{}", name)
    }
}

/// A fire-and-forget request to show a screen, with an optional parameter
/// (e.g., the name of the just-added item).
#[derive(Debug, Clone, PartialEq)]
pub struct NavRequest {
    pub screen: Screen,
    pub param: Option<String>,
}

impl NavRequest {
    pub fn to(screen: Screen) -> Self {
        Self {
            screen,
            param: None,
        }
    }

    pub fn with_param(screen: Screen, param: impl Into<String>) -> Self {
        Self {
            screen,
            param: Some(param.into()),
        }
    }
}

/// Receiver of navigation requests.
///
/// Requests are synchronous and infallible by contract; implementations must
/// not block.
pub trait Navigator: Send + Sync {
    fn request(&self, nav: NavRequest);
}

/// Logs navigation requests via tracing. The default production wiring.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn request(&self, nav: NavRequest) {
        match &nav.param {
            Some(param) => info!(screen = %nav.screen, param, "Navigation requested"),
            None => info!(screen = %nav.screen, "Navigation requested"),
        }
    }
}

/// Records navigation requests for test assertions.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<NavRequest>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<NavRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn request(&self, nav: NavRequest) {
        self.requests.lock().unwrap().push(nav);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.request(NavRequest::with_param(Screen::Order, "Iced Mocha"));
        nav.request(NavRequest::to(Screen::Menu));

        let requests = nav.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].screen, Screen::Order);
        assert_eq!(requests[0].param.as_deref(), Some("Iced Mocha"));
        assert_eq!(requests[1], NavRequest::to(Screen::Menu));
    }
}
