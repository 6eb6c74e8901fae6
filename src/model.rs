// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/model.rs - Object lookup contract and an in-memory logic model.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `model` Module
 *
 * The importer never owns circuit objects. It only needs a way to turn the
 * numeric ids stored in a blacklist file back into handles on live objects,
 * which is what [ObjectResolver] describes.
 *
 * [LogicModel] is a small in-memory implementation that hands out
 * non-owning [ObjectRef] handles.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

/// Stable numeric key of an object in the circuit model.
pub type ObjectId = u64;

/// Looks up live model objects by their stable id.
pub trait ObjectResolver {
    /// Handle stored inside imported violation records.
    type Handle: Clone + fmt::Debug + PartialEq;

    /// Returns a handle on the object with the given id, or `None` if the
    /// model has no such object.
    fn resolve(&self, id: ObjectId) -> Option<Self::Handle>;
}

impl<R: ObjectResolver + ?Sized> ObjectResolver for &R {
    type Handle = R::Handle;

    fn resolve(&self, id: ObjectId) -> Option<Self::Handle> {
        (**self).resolve(id)
    }
}

/// The kind of a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Gate,
    GatePort,
    Via,
    Wire,
    Annotation,
    EMarker,
}

/// An object placed on one of the layers of the logic model.
#[derive(Debug, PartialEq, Eq)]
pub struct PlacedObject {
    /// The stable id of the object.
    pub id: ObjectId,
    /// A human-readable name, possibly empty.
    pub name: String,
    /// What kind of object this is.
    pub kind: ObjectKind,
}

/// Non-owning handle on a [PlacedObject] held by a [LogicModel].
#[derive(Clone)]
pub struct ObjectRef {
    id: ObjectId,
    object: Weak<PlacedObject>,
}

impl ObjectRef {
    /// The id the handle was resolved from.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the object if the model still holds it.
    pub fn upgrade(&self) -> Option<Arc<PlacedObject>> {
        self.object.upgrade()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Weak::ptr_eq(&self.object, &other.object)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("id", &self.id)
            .field("live", &(self.object.strong_count() > 0))
            .finish()
    }
}

/// In-memory id to object map.
#[derive(Debug, Default)]
pub struct LogicModel {
    objects: HashMap<ObjectId, Arc<PlacedObject>>,
}

impl LogicModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object, replacing any previous object with the same id.
    pub fn insert(&mut self, id: ObjectId, name: &str, kind: ObjectKind) -> Arc<PlacedObject> {
        let object = Arc::new(PlacedObject {
            id,
            name: name.to_string(),
            kind,
        });
        self.objects.insert(id, Arc::clone(&object));
        object
    }

    /// Removes an object. Handles pointing at it stop upgrading.
    pub fn remove(&mut self, id: ObjectId) -> Option<Arc<PlacedObject>> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Arc<PlacedObject>> {
        self.objects.get(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectResolver for LogicModel {
    type Handle = ObjectRef;

    fn resolve(&self, id: ObjectId) -> Option<ObjectRef> {
        self.objects.get(&id).map(|object| ObjectRef {
            id,
            object: Arc::downgrade(object),
        })
    }
}
