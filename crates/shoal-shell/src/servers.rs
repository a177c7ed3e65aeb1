//! Add, rename, re-icon, toggle and remove servers.

use shoal_common::types::{display_letter, palette_color};
use shoal_common::{new_server_id, Server, ServerId};

use crate::address::parse_server_address;
use crate::state::ShellState;

/// Custom icons must be inline images.
const ICON_PREFIX: &str = "data:image/";

impl ShellState {
    /// Append a new server built from user input and return its id.
    ///
    /// The stored address never carries an invite; the invite address, if
    /// any, is kept on the entity for the first surface creation only.
    pub fn add_server(&mut self, name: &str, raw_address: &str, icon_url: Option<String>) -> ServerId {
        let address = parse_server_address(raw_address);
        let name = name.trim().to_string();
        let server = Server {
            id: new_server_id(),
            icon_letter: display_letter(&name),
            icon_color: palette_color(self.servers.len()).to_string(),
            name,
            url: address.base,
            icon_url: icon_url.filter(|u| u.starts_with(ICON_PREFIX)),
            keep_loaded: None,
            invite_url: address.invite,
        };
        let id = server.id.clone();
        self.servers.push(server);
        self.touch();
        id
    }

    /// Rename a server and recompute its letter. Blank names are refused.
    pub fn rename_server(&mut self, id: &ServerId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(server) = self.server_mut(id) else {
            return false;
        };
        server.name = name.to_string();
        server.icon_letter = display_letter(name);
        self.touch();
        true
    }

    /// Set or clear (`None`) the custom icon.
    pub fn set_server_icon(&mut self, id: &ServerId, icon_url: Option<String>) -> bool {
        if icon_url.as_deref().is_some_and(|u| !u.starts_with(ICON_PREFIX)) {
            return false;
        }
        let Some(server) = self.server_mut(id) else {
            return false;
        };
        server.icon_url = icon_url;
        self.touch();
        true
    }

    /// Flip `keepLoaded` and return the new value.
    pub fn toggle_keep_loaded(&mut self, id: &ServerId) -> Option<bool> {
        let server = self.server_mut(id)?;
        let keep = !server.keep_loaded();
        server.keep_loaded = Some(keep);
        self.touch();
        Some(keep)
    }

    /// Forget the pending invite once it has been used.
    pub(crate) fn clear_invite(&mut self, id: &ServerId) {
        if let Some(server) = self.server_mut(id) {
            server.invite_url = None;
        }
    }

    pub(crate) fn remove_server_entry(&mut self, id: &ServerId) -> Option<Server> {
        let index = self.servers.iter().position(|s| &s.id == id)?;
        let removed = self.servers.remove(index);
        self.touch();
        Some(removed)
    }

    fn server_mut(&mut self, id: &ServerId) -> Option<&mut Server> {
        self.servers.iter_mut().find(|s| &s.id == id)
    }
}
