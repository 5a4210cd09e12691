// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Root Model-View-Update kernel wiring application state, messages, and commands.
//!
//! Every user interaction becomes a [`Msg`] routed through [`update`], which
//! mutates the [`AppModel`] and enqueues [`Command`]s for the side effects
//! (file dialogs, image copies, saves). Commands run synchronously on the UI
//! thread via [`run_command`]; there is no background work.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use eframe::egui;

use crate::logic::store::{self, PersistedState, StorePaths};
use crate::models::axis::{AxisConfig, AxisField};
use crate::models::entry::{Entry, EntryStore, clamp_coord};
use crate::ui::components::thumbs;

/// Top-level application state, owned by the shell and read by all views.
pub struct AppModel {
    /// Insertion-ordered entry collection.
    pub store: EntryStore,
    /// Next id to assign. Persisted so ids are never reused across restarts.
    pub next_id: u64,
    /// Six axis labels rendered on the canvas.
    pub axis: AxisConfig,
    /// Managed data directory layout.
    pub paths: StorePaths,
    /// Currently selected entry, if any.
    pub selected: Option<u64>,
    /// Open edit dialog state.
    pub dialog: Option<EntryDialogState>,
    /// Entry shown in the read-only detail dialog.
    pub detail: Option<u64>,
    /// Entry awaiting delete confirmation.
    pub confirm_delete: Option<u64>,
    /// In-flight icon drag on the canvas.
    pub drag: Option<DragState>,
    /// Decoded entry thumbnails by id.
    pub thumbnails: HashMap<u64, egui::TextureHandle>,
    /// Entries whose thumbnail failed to decode; not retried.
    pub thumbnail_failures: HashSet<u64>,
    /// Entries with a decode already queued this frame cycle.
    pub thumbnail_pending: HashSet<u64>,
    /// Latest status message for the bottom panel.
    pub status: Option<String>,
    /// Error shown in the blocking modal.
    pub error: Option<String>,
    /// Informational message shown in the notice modal.
    pub notice: Option<String>,
}

/// Working buffer for the edit dialog; applied only on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDialogState {
    pub id: u64,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// Accumulated pixel offset of an icon being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub id: u64,
    pub offset: egui::Vec2,
}

impl AppModel {
    /// Fresh model over the given data directory, without touching disk.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            store: EntryStore::default(),
            next_id: 1,
            axis: AxisConfig::default(),
            paths,
            selected: None,
            dialog: None,
            detail: None,
            confirm_delete: None,
            drag: None,
            thumbnails: HashMap::new(),
            thumbnail_failures: HashSet::new(),
            thumbnail_pending: HashSet::new(),
            status: None,
            error: None,
            notice: None,
        }
    }

    /// Load persisted state from disk, surfacing problems on the model itself.
    ///
    /// A missing state file yields an empty model; entries whose backing image
    /// has gone missing are dropped and reported through the notice modal.
    pub fn load(paths: StorePaths) -> Self {
        let mut model = Self::new(paths);
        match store::load_state(&model.paths.entries_file) {
            Ok(loaded) => {
                model.next_id = loaded.state.next_id;
                model.store = EntryStore::from_entries(loaded.state.entries);
                model.axis = loaded.state.axis;
                if loaded.dropped_missing_images > 0 {
                    model.notice = Some(format!(
                        "{} entr{} dropped because the image file is missing.",
                        loaded.dropped_missing_images,
                        if loaded.dropped_missing_images == 1 {
                            "y was"
                        } else {
                            "ies were"
                        }
                    ));
                }
            }
            Err(err) => {
                surface_event(&mut model, format!("Failed to load data:\n\n{err:#}"), true);
            }
        }
        model
    }

    /// Immutable snapshot of everything that goes to disk.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            next_id: self.next_id,
            entries: self.store.to_vec(),
            axis: self.axis.clone(),
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    AddRequested,
    ImagePicked(PathBuf),
    AddCancelled,
    ImageImported(Result<ImportedImage, String>),
    EntrySelected(u64),
    NothingSelected,
    EditRequested(u64),
    DialogNameChanged(String),
    DialogXChanged(i32),
    DialogYChanged(i32),
    DialogConfirmed,
    DialogCancelled,
    DetailRequested(u64),
    DetailClosed,
    DeleteRequested(u64),
    DeleteConfirmed,
    DeleteCancelled,
    DragMoved { id: u64, delta: egui::Vec2 },
    DragEnded { id: u64, x: i32, y: i32 },
    AxisLabelChanged(AxisField, String),
    SaveRequested,
    SaveCompleted(Result<(), String>),
    ImageDeleted(PathBuf),
    ThumbnailRequested(u64),
    ThumbnailDecoded { id: u64, image: egui::ColorImage },
    ThumbnailReady { id: u64, texture: egui::TextureHandle },
    ThumbnailFailed { id: u64 },
    DismissError,
    DismissNotice,
}

/// A freshly copied image ready to become an entry.
pub struct ImportedImage {
    /// Id reserved for the new entry.
    pub id: u64,
    /// Managed copy inside the image directory.
    pub dest: PathBuf,
    /// Default entry name derived from the source file stem.
    pub name: String,
}

/// Captured state-file snapshot for a save command.
pub struct SavePayload {
    pub path: PathBuf,
    pub state: PersistedState,
}

/// Commands represent side effects executed between update passes.
pub enum Command {
    PickImageFile,
    ImportImage {
        paths: StorePaths,
        id: u64,
        source: PathBuf,
    },
    LoadThumbnail {
        id: u64,
        path: PathBuf,
    },
    SaveState(SavePayload),
    DeleteImage(PathBuf),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::AddRequested => cmds.push(Command::PickImageFile),
        Msg::AddCancelled => {}
        Msg::ImagePicked(source) => cmds.push(Command::ImportImage {
            paths: model.paths.clone(),
            id: model.next_id,
            source,
        }),
        Msg::ImageImported(Ok(imported)) => {
            let entry = Entry::new(imported.id, imported.name, imported.dest);
            model.next_id = model.next_id.max(entry.id + 1);
            model.selected = Some(entry.id);
            model.thumbnail_pending.insert(entry.id);
            cmds.push(Command::LoadThumbnail {
                id: entry.id,
                path: entry.image_path.clone(),
            });
            let name = entry.name.clone();
            model.store.push(entry);
            autosave(model, cmds);
            surface_event(model, format!("Added {name}"), false);
        }
        Msg::ImageImported(Err(err)) => {
            surface_event(model, format!("Failed to copy image:\n\n{err}"), true);
        }
        Msg::EntrySelected(id) => model.selected = Some(id),
        Msg::NothingSelected => model.notice = Some("Select an entry first".to_string()),
        Msg::EditRequested(id) => {
            if let Some(entry) = model.store.get(id) {
                model.selected = Some(id);
                model.dialog = Some(EntryDialogState {
                    id,
                    name: entry.name.clone(),
                    x: entry.x,
                    y: entry.y,
                });
            }
        }
        Msg::DialogNameChanged(text) => {
            if let Some(dialog) = &mut model.dialog {
                dialog.name = text;
            }
        }
        Msg::DialogXChanged(x) => {
            if let Some(dialog) = &mut model.dialog {
                dialog.x = clamp_coord(x);
            }
        }
        Msg::DialogYChanged(y) => {
            if let Some(dialog) = &mut model.dialog {
                dialog.y = clamp_coord(y);
            }
        }
        Msg::DialogConfirmed => {
            if let Some(dialog) = model.dialog.take() {
                if let Some(entry) = model.store.get_mut(dialog.id) {
                    entry.name = dialog.name;
                    entry.x = clamp_coord(dialog.x);
                    entry.y = clamp_coord(dialog.y);
                    let name = entry.name.clone();
                    autosave(model, cmds);
                    surface_event(model, format!("Updated {name}"), false);
                }
            }
        }
        Msg::DialogCancelled => model.dialog = None,
        Msg::DetailRequested(id) => {
            if model.store.get(id).is_some() {
                model.selected = Some(id);
                model.detail = Some(id);
            }
        }
        Msg::DetailClosed => model.detail = None,
        Msg::DeleteRequested(id) => {
            if model.store.get(id).is_some() {
                model.selected = Some(id);
                model.confirm_delete = Some(id);
            }
        }
        Msg::DeleteConfirmed => {
            if let Some(id) = model.confirm_delete.take() {
                if let Some(entry) = model.store.remove(id) {
                    model.thumbnails.remove(&id);
                    model.thumbnail_failures.remove(&id);
                    model.thumbnail_pending.remove(&id);
                    if model.selected == Some(id) {
                        model.selected = None;
                    }
                    if model.detail == Some(id) {
                        model.detail = None;
                    }
                    cmds.push(Command::DeleteImage(entry.image_path));
                    autosave(model, cmds);
                    surface_event(model, format!("Deleted {}", entry.name), false);
                }
            }
        }
        Msg::DeleteCancelled => model.confirm_delete = None,
        Msg::DragMoved { id, delta } => {
            match &mut model.drag {
                Some(drag) if drag.id == id => drag.offset += delta,
                _ => model.drag = Some(DragState { id, offset: delta }),
            }
            model.selected = Some(id);
        }
        Msg::DragEnded { id, x, y } => {
            model.drag = None;
            if let Some(entry) = model.store.get_mut(id) {
                entry.x = clamp_coord(x);
                entry.y = clamp_coord(y);
                let (name, x, y) = (entry.name.clone(), entry.x, entry.y);
                autosave(model, cmds);
                surface_event(model, format!("Moved {name} to ({x}, {y})"), false);
            }
        }
        Msg::AxisLabelChanged(field, text) => {
            model.axis.set(field, text);
            autosave(model, cmds);
        }
        Msg::SaveRequested => autosave(model, cmds),
        Msg::SaveCompleted(Ok(())) => model.status = Some("Saved".to_string()),
        Msg::SaveCompleted(Err(err)) => {
            surface_event(model, format!("Failed to save data:\n\n{err}"), true);
        }
        // Image-delete failures are swallowed; nothing to report.
        Msg::ImageDeleted(_) => {}
        Msg::ThumbnailRequested(id) => {
            let wanted = !model.thumbnails.contains_key(&id)
                && !model.thumbnail_failures.contains(&id)
                && model.thumbnail_pending.insert(id);
            if wanted {
                if let Some(entry) = model.store.get(id) {
                    cmds.push(Command::LoadThumbnail {
                        id,
                        path: entry.image_path.clone(),
                    });
                } else {
                    model.thumbnail_pending.remove(&id);
                }
            }
        }
        // Texture creation needs the egui context; the shell transforms this
        // into ThumbnailReady before it reaches update. No-op to avoid panic.
        Msg::ThumbnailDecoded { id, image } => {
            let _ = (id, image);
        }
        Msg::ThumbnailReady { id, texture } => {
            model.thumbnail_pending.remove(&id);
            model.thumbnails.insert(id, texture);
        }
        Msg::ThumbnailFailed { id } => {
            model.thumbnail_pending.remove(&id);
            model.thumbnail_failures.insert(id);
        }
        Msg::DismissError => model.error = None,
        Msg::DismissNotice => model.notice = None,
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickImageFile => {
            let file = rfd::FileDialog::new()
                .set_title("Select image")
                .add_filter("Images", &thumbs::IMAGE_EXTENSIONS)
                .pick_file();
            match file {
                Some(path) => Msg::ImagePicked(path),
                None => Msg::AddCancelled,
            }
        }
        Command::ImportImage { paths, id, source } => {
            match store::import_image(&paths, id, &source) {
                Ok((dest, name)) => Msg::ImageImported(Ok(ImportedImage { id, dest, name })),
                Err(err) => Msg::ImageImported(Err(format!("{err:#}"))),
            }
        }
        Command::LoadThumbnail { id, path } => match thumbs::load_thumbnail(&path) {
            Ok(image) => Msg::ThumbnailDecoded { id, image },
            Err(_) => Msg::ThumbnailFailed { id },
        },
        Command::SaveState(payload) => Msg::SaveCompleted(
            store::save_state(&payload.path, &payload.state).map_err(|e| format!("{e:#}")),
        ),
        Command::DeleteImage(path) => {
            store::delete_image(&path);
            Msg::ImageDeleted(path)
        }
    }
}

/// Snapshot the model and enqueue an immediate save. Called after every
/// mutating action; there is no batching or debounce.
fn autosave(model: &AppModel, cmds: &mut Vec<Command>) {
    cmds.push(Command::SaveState(SavePayload {
        path: model.paths.entries_file.clone(),
        state: model.snapshot(),
    }));
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
