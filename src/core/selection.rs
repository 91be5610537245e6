use super::projects::{project_by_id, Project};

/// Which project the detail pane shows, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<&'static Project>,
}

impl Selection {
    #[inline]
    pub fn current(&self) -> Option<&'static Project> {
        self.current
    }

    #[inline]
    pub fn is_selected(&self, id: u32) -> bool {
        self.current.is_some_and(|p| p.id == id)
    }

    /// Select by id. Unknown ids leave the selection untouched.
    /// Returns true when the shown project changed.
    pub fn select(&mut self, id: u32) -> bool {
        match project_by_id(id) {
            Some(p) if !self.is_selected(id) => {
                self.current = Some(p);
                true
            }
            _ => false,
        }
    }

    pub fn detail(&self) -> DetailView {
        match self.current {
            None => DetailView::Placeholder,
            Some(p) => DetailView::Project(ProjectDetail::from(p)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageView {
    pub src: &'static str,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: Vec<&'static str>,
    pub images: Vec<ImageView>,
}

impl From<&'static Project> for ProjectDetail {
    fn from(p: &'static Project) -> Self {
        let images = p
            .images
            .iter()
            .copied()
            .enumerate()
            .map(|(i, src)| ImageView {
                src,
                alt: format!("{} - Image {}", p.title, i + 1),
            })
            .collect();
        Self {
            title: p.title,
            description: p.description,
            categories: p.categories.to_vec(),
            images,
        }
    }
}

/// What the detail pane renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    Placeholder,
    Project(ProjectDetail),
}
