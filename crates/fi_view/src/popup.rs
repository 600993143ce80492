/// Two-state widget: closed, or open with the payload it was opened for.
#[derive(Debug, Clone, PartialEq)]
pub enum Popup<T> {
    Closed,
    Open(T),
}

impl<T> Default for Popup<T> {
    fn default() -> Self {
        Popup::Closed
    }
}

impl<T> Popup<T> {
    pub fn open(&mut self, payload: T) {
        *self = Popup::Open(payload);
    }

    /// Close and hand back whatever the popup was showing.
    pub fn close(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Popup::Open(payload) => Some(payload),
            Popup::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Popup::Open(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Popup::Open(payload) => Some(payload),
            Popup::Closed => None,
        }
    }
}
