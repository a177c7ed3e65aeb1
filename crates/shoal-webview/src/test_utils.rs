//! Recording [`SurfaceHost`] for registry and lifecycle tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use shoal_common::{DevicePreferences, Rect, ServerId, SurfaceError, Viewport};

use crate::host::{SurfaceHost, SurfaceParams};

/// One call made against the fake host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create {
        id: ServerId,
        address: String,
        devices: DevicePreferences,
    },
    Confirm(ServerId),
    SetBounds(ServerId, Rect),
    SetVisible(ServerId, bool),
    Focus(ServerId),
    Reload(ServerId),
    Close(ServerId),
}

/// Surface handle issued by [`FakeHost`].
#[derive(Debug)]
pub struct FakeSurface {
    pub id: ServerId,
    pub serial: u32,
}

/// In-memory host that records every call and tracks which surfaces are
/// alive and visible. Failures can be injected per server id.
#[derive(Debug)]
pub struct FakeHost {
    pub viewport: Viewport,
    pub fail_create: HashSet<ServerId>,
    pub fail_confirm: HashSet<ServerId>,
    pub fail_hide: HashSet<ServerId>,
    pub fail_close: HashSet<ServerId>,
    pub fail_reload: HashSet<ServerId>,
    calls: RefCell<Vec<HostCall>>,
    visible: RefCell<HashMap<u32, bool>>,
    owners: HashMap<u32, ServerId>,
    next_serial: u32,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280, 800, 1.0),
            fail_create: HashSet::new(),
            fail_confirm: HashSet::new(),
            fail_hide: HashSet::new(),
            fail_close: HashSet::new(),
            fail_reload: HashSet::new(),
            calls: RefCell::new(Vec::new()),
            visible: RefCell::new(HashMap::new()),
            owners: HashMap::new(),
            next_serial: 1,
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Addresses passed to `create_surface`, in order.
    pub fn created(&self) -> Vec<(ServerId, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Create { id, address, .. } => Some((id.clone(), address.clone())),
                _ => None,
            })
            .collect()
    }

    /// Live (not closed) surfaces belonging to `id`.
    pub fn live_count(&self, id: &ServerId) -> usize {
        self.owners.values().filter(|owner| *owner == id).count()
    }

    pub fn live_total(&self) -> usize {
        self.owners.len()
    }

    /// Whether any live surface of `id` is visible on screen.
    pub fn is_visible(&self, id: &ServerId) -> bool {
        let visible = self.visible.borrow();
        self.owners
            .iter()
            .any(|(serial, owner)| owner == id && visible.get(serial).copied().unwrap_or(false))
    }

    /// Ids with a visible live surface, sorted.
    pub fn visible_ids(&self) -> Vec<ServerId> {
        let visible = self.visible.borrow();
        let mut ids: Vec<ServerId> = self
            .owners
            .iter()
            .filter(|(serial, _)| visible.get(serial).copied().unwrap_or(false))
            .map(|(_, owner)| owner.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SurfaceHost for FakeHost {
    type Surface = FakeSurface;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_surface(&mut self, params: SurfaceParams<'_>) -> Result<FakeSurface, SurfaceError> {
        self.record(HostCall::Create {
            id: params.id.clone(),
            address: params.address.to_string(),
            devices: params.devices.clone(),
        });
        if self.fail_create.contains(params.id) {
            return Err(SurfaceError::Creation {
                id: params.id.clone(),
                reason: "injected failure".into(),
            });
        }
        let serial = self.next_serial;
        self.next_serial += 1;
        self.owners.insert(serial, params.id.clone());
        self.visible.borrow_mut().insert(serial, true);
        Ok(FakeSurface {
            id: params.id.clone(),
            serial,
        })
    }

    fn confirm_surface(&self, surface: &FakeSurface) -> Result<(), SurfaceError> {
        self.record(HostCall::Confirm(surface.id.clone()));
        if self.fail_confirm.contains(&surface.id) {
            return Err(SurfaceError::NotConfirmed(surface.id.clone()));
        }
        Ok(())
    }

    fn set_bounds(&self, surface: &FakeSurface, bounds: Rect) -> Result<(), SurfaceError> {
        self.record(HostCall::SetBounds(surface.id.clone(), bounds));
        Ok(())
    }

    fn set_visible(&self, surface: &FakeSurface, visible: bool) -> Result<(), SurfaceError> {
        self.record(HostCall::SetVisible(surface.id.clone(), visible));
        if !visible && self.fail_hide.contains(&surface.id) {
            return Err(SurfaceError::Host("injected hide failure".into()));
        }
        self.visible.borrow_mut().insert(surface.serial, visible);
        Ok(())
    }

    fn focus(&self, surface: &FakeSurface) -> Result<(), SurfaceError> {
        self.record(HostCall::Focus(surface.id.clone()));
        Ok(())
    }

    fn reload(&self, surface: &FakeSurface) -> Result<(), SurfaceError> {
        self.record(HostCall::Reload(surface.id.clone()));
        if self.fail_reload.contains(&surface.id) {
            return Err(SurfaceError::Host("injected reload failure".into()));
        }
        Ok(())
    }

    fn close(&mut self, surface: FakeSurface) -> Result<(), SurfaceError> {
        self.record(HostCall::Close(surface.id.clone()));
        if self.fail_close.contains(&surface.id) {
            return Err(SurfaceError::Host("injected close failure".into()));
        }
        self.owners.remove(&surface.serial);
        self.visible.borrow_mut().remove(&surface.serial);
        Ok(())
    }
}
