use futures::channel::mpsc::UnboundedReceiver;
use crate::error::DocumentError;
use crate::event::{DocumentEvent, EventBus, EventHandler, SubscriptionId};
use crate::history::{History, Snapshot};
use crate::palette::Palette;
use crate::shape::{Point, Shape, ShapeKind};
use crate::tool::Tool;

/// The editing session's single owner of all drawing state.
///
/// A document holds a linear history of [`Snapshot`]s plus the interaction
/// state around it: the active tool, the kind of shape the draw tool
/// produces, the selected shape and the selected palette color.
///
/// # Discrete and continuous edits
///
/// [`add_shape`](Self::add_shape), [`remove_shape`](Self::remove_shape) and
/// [`update_shape`](Self::update_shape) each append exactly one snapshot and
/// are undoable as one step. [`update_shape_mut`](Self::update_shape_mut)
/// rewrites the current snapshot in place and never creates an undo point,
/// so a drag made of many such calls is invisible to undo and redo.
///
/// # Notifications
///
/// Every successful mutation emits one [`DocumentEvent`] to all subscribers
/// before returning. Failed calls change nothing and emit nothing.
#[derive(Debug)]
pub struct Document {
    history: History,
    tool: Tool,
    shape_kind: ShapeKind,
    selected: Option<usize>,
    selected_color: usize,
    palette: Palette,
    events: EventBus,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.history == other.history
            && self.tool == other.tool
            && self.shape_kind == other.shape_kind
            && self.selected == other.selected
            && self.selected_color == other.selected_color
            && self.palette == other.palette
    }
}

impl Document {
    /// An empty document using the default palette
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            history: History::new(),
            tool: Tool::default(),
            shape_kind: ShapeKind::default(),
            selected: None,
            selected_color: 0,
            palette,
            events: EventBus::new(),
        }
    }

    /// Assembles a restored document. The caller validates history and color;
    /// the selection is dropped if it does not fit the current snapshot.
    pub(crate) fn from_parts(
        history: History,
        tool: Tool,
        shape_kind: ShapeKind,
        selected: Option<usize>,
        selected_color: usize,
        palette: Palette,
    ) -> Self {
        let mut doc = Self {
            history,
            tool,
            shape_kind,
            selected,
            selected_color,
            palette,
            events: EventBus::new(),
        };
        if doc.revalidate_selection() {
            log::warn!(
                "Discarded restored selection {:?}: current snapshot has {} shapes",
                selected,
                doc.current_shapes().len()
            );
        }
        doc
    }

    // ---- Queries ----

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn current_shapes(&self) -> &[Shape] {
        &self.history.current().shapes
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The kind of shape the draw tool produces
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|index| self.current_shapes().get(index))
    }

    pub fn selected_color_index(&self) -> usize {
        self.selected_color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the topmost shape whose bound contains `point`
    pub fn shape_at(&self, point: Point) -> Option<usize> {
        self.current_shapes()
            .iter()
            .rposition(|shape| shape.bound.contains(point))
    }

    // ---- History ----

    pub fn undo(&mut self) -> Result<(), DocumentError> {
        let cursor = self.history.undo().inspect_err(|err| {
            log::warn!("Rejected undo: {}", err);
        })?;
        self.revalidate_selection();
        self.notify(DocumentEvent::Undone { cursor });
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), DocumentError> {
        let cursor = self.history.redo().inspect_err(|err| {
            log::warn!("Rejected redo: {}", err);
        })?;
        self.revalidate_selection();
        self.notify(DocumentEvent::Redone { cursor });
        Ok(())
    }

    // ---- Discrete edits ----

    /// Appends `shape` on top of a new snapshot and returns its index.
    /// Selection is left alone.
    pub fn add_shape(&mut self, shape: Shape) -> Result<usize, DocumentError> {
        self.check_shape(self.current_shapes().len(), &shape)?;
        let snapshot = self.history.branch();
        snapshot.shapes.push(shape);
        let index = snapshot.shapes.len() - 1;
        self.notify(DocumentEvent::ShapeAdded { index });
        Ok(index)
    }

    /// Creates a new snapshot without the shape at `index` and returns it.
    ///
    /// The selection index is not shifted; callers that removed the selected
    /// shape clear the selection themselves. A selection left past the end of
    /// the new snapshot is cleared.
    pub fn remove_shape(&mut self, index: usize) -> Result<Shape, DocumentError> {
        self.check_index(index)?;
        let shape = self.history.branch().shapes.remove(index);
        self.revalidate_selection();
        self.notify(DocumentEvent::ShapeRemoved { index });
        Ok(shape)
    }

    /// Creates a new snapshot with the shape at `index` replaced
    pub fn update_shape(&mut self, index: usize, shape: Shape) -> Result<(), DocumentError> {
        self.check_index(index)?;
        self.check_shape(index, &shape)?;
        self.history.branch().shapes[index] = shape;
        self.notify(DocumentEvent::ShapeUpdated { index });
        Ok(())
    }

    // ---- Continuous edits ----

    /// Replaces the shape at `index` inside the current snapshot.
    ///
    /// Does not create an undo checkpoint and does not discard redo history.
    /// Intended for per-frame feedback while a pointer is dragging.
    pub fn update_shape_mut(&mut self, index: usize, shape: Shape) -> Result<(), DocumentError> {
        self.check_index(index)?;
        self.check_shape(index, &shape)?;
        self.history.current_mut().shapes[index] = shape;
        log::trace!("Shape {} updated in place at snapshot {}", index, self.cursor());
        self.notify(DocumentEvent::ShapeDragged { index });
        Ok(())
    }

    // ---- Interaction state ----

    /// Selects the shape at `index`, or clears the selection with `None`.
    ///
    /// Selecting a shape also makes its color the selected color. An index
    /// past the end of the current snapshot clears the selection. Returns the
    /// selection that took effect.
    pub fn set_selection(&mut self, index: Option<usize>) -> Option<usize> {
        self.selected = match index {
            Some(i) => match self.current_shapes().get(i).map(|shape| shape.color) {
                Some(color) => {
                    self.selected_color = color;
                    Some(i)
                }
                None => {
                    log::debug!("Selection {} out of range, clearing", i);
                    None
                }
            },
            None => None,
        };
        let selected = self.selected;
        self.notify(DocumentEvent::SelectionChanged { selected });
        selected
    }

    /// Changes the selected palette color. Shapes are not recolored.
    pub fn set_selected_color(&mut self, index: usize) -> Result<(), DocumentError> {
        self.check_color(index)?;
        self.selected_color = index;
        self.notify(DocumentEvent::ColorSelected { index });
        Ok(())
    }

    pub fn use_move_tool(&mut self) {
        self.tool = Tool::Move;
        self.notify_tool();
    }

    /// Switches to drawing and sets the kind of shape drawn next
    pub fn use_draw_tool(&mut self, kind: ShapeKind) {
        self.tool = Tool::Draw;
        self.shape_kind = kind;
        self.notify_tool();
    }

    // ---- Observers ----

    /// Registers `handler` and immediately sends it [`DocumentEvent::Attached`]
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        let id = self.events.subscribe(handler);
        let mut events = std::mem::take(&mut self.events);
        events.emit_to(id, self, &DocumentEvent::Attached);
        self.events = events;
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// A channel of every subsequent event, for hosts that poll after each call
    pub fn event_stream(&mut self) -> UnboundedReceiver<DocumentEvent> {
        let (_, rx) = self.events.channel();
        rx
    }

    fn notify(&mut self, event: DocumentEvent) {
        // Handlers borrow the document, so the bus is moved out for the call
        let mut events = std::mem::take(&mut self.events);
        events.emit(self, &event);
        self.events = events;
    }

    fn notify_tool(&mut self) {
        log::debug!("Switched to {} tool, drawing {}", self.tool.name(), self.shape_kind.name());
        let event = DocumentEvent::ToolChanged {
            tool: self.tool,
            shape_kind: self.shape_kind,
        };
        self.notify(event);
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        let len = self.current_shapes().len();
        if index >= len {
            log::warn!("Rejected shape index {} with {} shapes", index, len);
            return Err(DocumentError::ShapeIndexOutOfRange { index, len });
        }
        Ok(())
    }

    // Bounds stay unclamped and unordered, but must be representable in the blob
    fn check_shape(&self, index: usize, shape: &Shape) -> Result<(), DocumentError> {
        if !shape.bound.is_finite() {
            log::warn!("Rejected non-finite bound {:?} for shape {}", shape.bound, index);
            return Err(DocumentError::NonFiniteBound { index });
        }
        self.check_color(shape.color)
    }

    fn check_color(&self, index: usize) -> Result<(), DocumentError> {
        if !self.palette.contains_index(index) {
            log::warn!("Rejected color index {} with {} colors", index, self.palette.len());
            return Err(DocumentError::ColorIndexOutOfRange {
                index,
                len: self.palette.len(),
            });
        }
        Ok(())
    }

    // Returns true if a selection was cleared
    fn revalidate_selection(&mut self) -> bool {
        match self.selected {
            Some(index) if index >= self.current_shapes().len() => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
