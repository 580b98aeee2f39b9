use crate::app::domain::document::{Document, DocumentId};
use crate::app::domain::settings::SharedSettings;
use crate::app::infrastructure::error::Result;

/// The editor container: one document per open file, in tab order.
pub struct TabManager {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
    settings: SharedSettings,
}

impl TabManager {
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 1,
            settings,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Load `path` into a new tab and make it current.
    pub fn add_editor(
        &mut self,
        path: &str,
        name: String,
        mimetype: Option<String>,
    ) -> Result<DocumentId> {
        let id = self.next_document_id();
        let doc = Document::open(id, path, name, mimetype, self.settings.clone())?;
        self.documents.push(doc);
        self.active_id = Some(id);
        Ok(id)
    }

    /// Tab index of the document bound to `path`.
    pub fn index_from_filename(&self, path: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.file_path == path)
    }

    pub fn set_current_index(&mut self, index: usize) {
        if let Some(doc) = self.documents.get(index) {
            self.active_id = Some(doc.id);
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        let active_id = self.active_id?;
        self.documents.iter().position(|d| d.id == active_id)
    }

    pub fn current(&self) -> Option<&Document> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn current_mut(&mut self) -> Option<&mut Document> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
        }
    }

    /// Save the current document, optionally under a new path.
    ///
    /// Saving under a path another tab is bound to closes that tab, so a file
    /// is never open twice. Tabs are only touched once the file is written; a
    /// failed save leaves every document as it was. Returns the id of the
    /// saved document.
    pub fn save_current(&mut self, path: Option<&str>) -> Result<Option<DocumentId>> {
        let Some(active_id) = self.active_id else {
            return Ok(None);
        };
        let Some(path) = path else {
            self.save(active_id)?;
            return Ok(Some(active_id));
        };

        let Some(doc) = self.current_mut() else {
            return Ok(None);
        };
        doc.write_to(path)?;
        doc.rebind(path);
        doc.mark_clean();

        let other = self
            .documents
            .iter()
            .find(|d| d.file_path == path && d.id != active_id)
            .map(|d| d.id);
        if let Some(other) = other {
            tracing::info!("closing tab {:?}, its file was overwritten", other);
            self.documents.retain(|d| d.id != other);
        }
        Ok(Some(active_id))
    }

    /// Save a document to its own path.
    pub fn save(&mut self, id: DocumentId) -> Result<()> {
        match self.doc_by_id_mut(id) {
            Some(doc) => doc.save(),
            None => Ok(()),
        }
    }

    pub fn dirty_ids(&self) -> Vec<DocumentId> {
        self.documents
            .iter()
            .filter(|d| d.is_dirty())
            .map(|d| d.id)
            .collect()
    }

    /// Remove a document by id. Activates the nearest neighbor.
    pub fn close(&mut self, id: DocumentId) {
        let idx = match self.documents.iter().position(|d| d.id == id) {
            Some(i) => i,
            None => return,
        };
        self.documents.remove(idx);

        if self.active_id == Some(id) {
            if self.documents.is_empty() {
                self.active_id = None;
            } else {
                let new_idx = idx.min(self.documents.len() - 1);
                self.active_id = Some(self.documents[new_idx].id);
            }
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn doc_by_id_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }
}
