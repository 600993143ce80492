//! Navigation bar: current page plus the notification and user menus.

use std::fmt;
use std::str::FromStr;

use fi_core::Error;
use tracing::debug;

use crate::Popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Predict,
    Recommend,
    TechStack,
    Notifications,
    Profile,
    Settings,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Predict => "/predict",
            Route::Recommend => "/recommend",
            Route::TechStack => "/tech-stack",
            Route::Notifications => "/notifications",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
            Route::Login => "/login",
        }
    }

    /// Navigation bar and footer are hidden on the login page.
    pub fn shows_chrome(&self) -> bool {
        *self != Route::Login
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(Route::Home),
            "/predict" => Ok(Route::Predict),
            "/recommend" => Ok(Route::Recommend),
            "/tech-stack" => Ok(Route::TechStack),
            "/notifications" => Ok(Route::Notifications),
            "/profile" => Ok(Route::Profile),
            "/settings" => Ok(Route::Settings),
            "/login" => Ok(Route::Login),
            other => Err(Error::InvalidUrl(format!("No page at {}", other))),
        }
    }
}

/// Element a menu is anchored to, as named by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor(pub String);

impl From<&str> for Anchor {
    fn from(value: &str) -> Self {
        Anchor(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuEntry {
    Profile,
    Settings,
    Logout,
}

impl UserMenuEntry {
    pub fn route(&self) -> Route {
        match self {
            UserMenuEntry::Profile => Route::Profile,
            UserMenuEntry::Settings => Route::Settings,
            UserMenuEntry::Logout => Route::Login,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavBar {
    route: Route,
    pub notification_menu: Popup<Anchor>,
    pub user_menu: Popup<Anchor>,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.route == route
    }

    /// Go to `route`. Any open menu is dismissed.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating {} -> {}", self.route, route);
        self.dismiss_menus();
        self.route = route;
    }

    pub fn open_notifications(&mut self, anchor: impl Into<Anchor>) {
        self.user_menu.close();
        self.notification_menu.open(anchor.into());
    }

    pub fn open_user_menu(&mut self, anchor: impl Into<Anchor>) {
        self.notification_menu.close();
        self.user_menu.open(anchor.into());
    }

    /// Outside click or explicit dismissal.
    pub fn dismiss_menus(&mut self) {
        self.notification_menu.close();
        self.user_menu.close();
    }

    /// Clicking a notification in the menu just closes it.
    pub fn select_notification(&mut self) {
        self.notification_menu.close();
    }

    pub fn view_all_notifications(&mut self) {
        self.navigate(Route::Notifications);
    }

    pub fn select_user_entry(&mut self, entry: UserMenuEntry) {
        self.navigate(entry.route());
    }
}
