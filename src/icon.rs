/// Presentational glyphs referenced by tabs, sidebar buttons and quick facts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    AlertTriangle,
    Award,
    Bike,
    Building,
    Bus,
    Calculator,
    Clock,
    DollarSign,
    FileText,
    HardHat,
    Headphones,
    Heart,
    HelpCircle,
    Mail,
    MessageCircle,
    Phone,
    Pill,
    Scale,
    Settings,
    Shield,
    Star,
    Stethoscope,
    Users,
    VolumeX,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "📈",
            Icon::AlertTriangle => "⚠️",
            Icon::Award => "🏆",
            Icon::Bike => "🚲",
            Icon::Building => "🏛️",
            Icon::Bus => "🚌",
            Icon::Calculator => "🧮",
            Icon::Clock => "⏰",
            Icon::DollarSign => "💲",
            Icon::FileText => "📄",
            Icon::HardHat => "👷",
            Icon::Headphones => "🎧",
            Icon::Heart => "❤️",
            Icon::HelpCircle => "❓",
            Icon::Mail => "✉️",
            Icon::MessageCircle => "💬",
            Icon::Phone => "📞",
            Icon::Pill => "💊",
            Icon::Scale => "⚖️",
            Icon::Settings => "⚙️",
            Icon::Shield => "🛡️",
            Icon::Star => "⭐",
            Icon::Stethoscope => "🩺",
            Icon::Users => "👥",
            Icon::VolumeX => "🔇",
        }
    }
}
