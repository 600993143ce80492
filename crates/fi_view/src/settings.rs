#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    DarkMode,
    EmailNotifications,
    MarketingEmails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    pub email_notifications: bool,
    pub marketing_emails: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            email_notifications: true,
            marketing_emails: false,
        }
    }
}

impl Settings {
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::DarkMode => self.dark_mode,
            Setting::EmailNotifications => self.email_notifications,
            Setting::MarketingEmails => self.marketing_emails,
        }
    }

    /// Flip a switch and return its new value.
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = match setting {
            Setting::DarkMode => &mut self.dark_mode,
            Setting::EmailNotifications => &mut self.email_notifications,
            Setting::MarketingEmails => &mut self.marketing_emails,
        };
        *slot = !*slot;
        *slot
    }
}
