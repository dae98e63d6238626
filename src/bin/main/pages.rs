use folio_core::catalog::{CatalogError, ContentBlock, PageEntry, PageId, StaticCatalog};

pub(super) const PAGE_CAPACITY: usize = 8;

pub(super) const HOME: PageId = PageId::new("home");
pub(super) const ABOUT: PageId = PageId::new("about");
pub(super) const EXPERIENCE: PageId = PageId::new("experience");
pub(super) const PROJECTS: PageId = PageId::new("projects");
pub(super) const CONTACT: PageId = PageId::new("contact");

const HOME_BLOCKS: &[ContentBlock] = &[
    ContentBlock::Item("Available for hire · Delhi NCR · Open to remote"),
    ContentBlock::Heading("Senior Software Engineer · Full Stack · 4+ Years"),
    ContentBlock::Paragraph("// and I've shipped enough code to prove it."),
    ContentBlock::Link {
        label: "View My Work",
        target: PROJECTS,
    },
    ContentBlock::Paragraph("Currently at CrownStack as Senior Software Engineer."),
];

const ABOUT_BLOCKS: &[ContentBlock] = &[
    ContentBlock::Heading("Origin Story"),
    ContentBlock::Paragraph("Not Billionaire. But Close Enough."),
    ContentBlock::Paragraph(
        "Computer Science grad, professional since 2021, specialising in Node.js, React.js \
         and AWS, and in systems that don't fall apart at 3x load.",
    ),
    ContentBlock::Link {
        label: "Send the Signal",
        target: CONTACT,
    },
];

const EXPERIENCE_BLOCKS: &[ContentBlock] = &[
    ContentBlock::Heading("Where I've Fought Crime."),
    ContentBlock::Item("Senior Software Engineer · CrownStack"),
    ContentBlock::Item("FullStack Engineer · Aapna Infotech"),
];

const PROJECTS_BLOCKS: &[ContentBlock] = &[
    ContentBlock::Heading("Problems Solved. Systems Shipped."),
    ContentBlock::Item("The Closing Exchange: enterprise platform with real-time comms"),
    ContentBlock::Item("Auto Assignment System: vendor assignment on Redis queues and Lambda"),
    ContentBlock::Heading("Awards I Didn't Ask For."),
    ContentBlock::Item("Emerging Star Award"),
    ContentBlock::Item("Hackathon Runner-Up"),
];

const CONTACT_BLOCKS: &[ContentBlock] = &[
    ContentBlock::Heading("Don't Have a Bat-Phone? Email Works Too."),
    ContentBlock::Paragraph(
        "Open to full-time roles, interesting freelance work, and conversations that \
         don't start with \"quick question.\"",
    ),
];

const PAGES: [PageEntry; 5] = [
    PageEntry::new(HOME, "Home", HOME_BLOCKS),
    PageEntry::new(ABOUT, "About", ABOUT_BLOCKS),
    PageEntry::new(EXPERIENCE, "Experience", EXPERIENCE_BLOCKS),
    PageEntry::new(PROJECTS, "Projects", PROJECTS_BLOCKS),
    PageEntry::new(CONTACT, "Contact", CONTACT_BLOCKS),
];

pub(super) fn catalog() -> Result<StaticCatalog<PAGE_CAPACITY>, CatalogError> {
    StaticCatalog::new(&PAGES)
}

pub(super) fn page_by_name(name: &str) -> Option<PageId> {
    PAGES
        .iter()
        .map(|entry| entry.id)
        .find(|id| id.as_str() == name)
}
