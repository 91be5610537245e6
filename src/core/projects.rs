#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub images: &'static [&'static str],
    pub color: &'static str,
}

const WIDE_PLACEHOLDER: &str = "/placeholder.svg?height=800&width=1200";
pub const PORTRAIT_IMAGE: &str = "/placeholder.svg?height=600&width=800";

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Ethereal Visions",
        date: "2024-03-15",
        description: "A series exploring the intersection of dreams and reality through surreal digital compositions.",
        categories: &["Digital Art", "Surrealism"],
        images: &[WIDE_PLACEHOLDER, WIDE_PLACEHOLDER],
        color: "#FFD700",
    },
    Project {
        id: 2,
        title: "Urban Fragments",
        date: "2024-02-28",
        description: "Capturing the essence of city life through fragmented, abstract representations of urban landscapes.",
        categories: &["Mixed Media", "Abstract"],
        images: &[WIDE_PLACEHOLDER, WIDE_PLACEHOLDER, WIDE_PLACEHOLDER],
        color: "#4682B4",
    },
    Project {
        id: 3,
        title: "Chromatic Emotions",
        date: "2024-01-10",
        description: "An exploration of human emotions through vibrant color palettes and expressive brushstrokes.",
        categories: &["Painting", "Expressionism"],
        images: &[WIDE_PLACEHOLDER],
        color: "#FF4500",
    },
];

#[inline]
pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
