//! The site's bicycle page has no FAQ and no lead form. The evaluation
//! section, its form and the FAQ entries below were written for this page
//! from its own copy; they are not taken from the site.

use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "bicycle-accidents",
    name: "Bicycle Accidents",
    seo: Seo {
        title: "California Bicycle Accident Lawyers | Protecting Cyclists' Rights",
        description: "Expert bicycle accident attorneys protecting cyclists throughout California. Former defense counsel now fighting driver negligence. Free consultation for bike injury cases.",
        canonical: "/practice-areas/bicycle-accidents",
        structured_data: false,
    },
    hero: Hero {
        title: "California Bicycle Accident Lawyers",
        tagline: "Protecting Cyclists' Rights Against Driver Negligence",
        cta: CallToAction {
            label: "START MY FREE CASE EVALUATION",
            href: EVALUATION,
            icon: None,
        },
    },
    sections: SECTIONS,
    faqs: FAQS,
    lead_form: Some(LeadForm {
        fields: FIELDS,
        submit_label: "Start My Free Evaluation",
        policy: SubmitPolicy::Navigate(EVALUATION),
    }),
    sidebar: Sidebar {
        blurb: "Former defense attorney now fighting for injured cyclists throughout all 58 California counties.",
        actions: &[
            CallToAction {
                label: "Call (818) 123-4567",
                href: "tel:8181234567",
                icon: Some(Icon::Phone),
            },
            CallToAction {
                label: "Start Case Evaluation",
                href: EVALUATION,
                icon: Some(Icon::Scale),
            },
            CallToAction {
                label: "Email Us",
                href: "mailto:info@trembachlawfirm.com",
                icon: Some(Icon::Mail),
            },
        ],
        facts: &[
            QuickFact {
                icon: Icon::Clock,
                title: "Time Limit",
                text: "2 years, 6 months for government claims",
            },
            QuickFact {
                icon: Icon::Bike,
                title: "Three Feet for Safety",
                text: "Drivers must give cyclists 3 feet when passing",
            },
            QuickFact {
                icon: Icon::Shield,
                title: "No Win, No Fee",
                text: "We only get paid if you win",
            },
        ],
    },
    closing: Closing {
        heading: "Injured While Cycling?",
        text: CLOSING_TEXT,
        actions: &[
            CallToAction {
                label: "CALL (818) 123-4567",
                href: "tel:8181234567",
                icon: Some(Icon::Phone),
            },
            CallToAction {
                label: "START MY FREE CASE EVALUATION",
                href: EVALUATION,
                icon: None,
            },
        ],
    },
    go_back: false,
};

const EVALUATION: &str = "/practice-areas/bicycle-accidents/case-evaluation";

const CLOSING_TEXT: &str = "Don't let insurance companies exploit anti-cyclist bias to deny fair compensation. Our experienced bicycle accident attorneys understand the cycling community and fight aggressively for your rights as a legitimate road user. You chose sustainable, healthy transportation—you deserve protection and respect.";

const ACCIDENT_TYPES: &[SelectOption] = &[
    SelectOption { value: "right-hook", label: "Right Hook" },
    SelectOption { value: "dooring", label: "Dooring" },
    SelectOption { value: "left-turn", label: "Left Turn Collision" },
    SelectOption { value: "close-pass", label: "Close Passing" },
    SelectOption { value: "rear-end", label: "Rear-End Collision" },
    SelectOption { value: "infrastructure", label: "Road or Bike Lane Defect" },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "accidentDate",
        label: "Accident Date",
        kind: FieldKind::Date,
        placeholder: "",
        required: false,
    },
    FieldSpec {
        name: "accidentType",
        label: "Type of Accident",
        kind: FieldKind::Select(ACCIDENT_TYPES),
        placeholder: "Select accident type...",
        required: false,
    },
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "California's Bicycle Safety Crisis",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("California leads the nation in bicycle commuting, recreational cycling, and unfortunately, cyclist fatalities, with over 150 deaths and 13,000 injuries annually from bicycle-vehicle collisions. When a 4,000-pound vehicle strikes a 20-pound bicycle, the cyclist bears catastrophic consequences while drivers walk away unharmed, yet insurance companies systematically blame cyclists for accidents caused by driver inattention, aggression, and failure to share the road safely. At Trembach Law Firm, we leverage our former defense attorney insight to expose these discriminatory tactics and secure maximum compensation for cyclists whose lives have been forever changed by preventable collisions."),
            Block::Paragraph("The vulnerability of cyclists on California roads cannot be understated—despite following traffic laws, wearing protective gear, and riding defensively, cyclists remain exposed to devastating injuries when drivers fail to look before turning, pass too closely, open doors without checking, or simply refuse to acknowledge bicycles as legitimate road users with equal rights. The resulting injuries typically include traumatic brain injuries despite helmet use, spinal cord damage from high-impact collisions, complex fractures requiring multiple surgeries, and severe road rash causing permanent scarring."),
            Block::Paragraph("California's progressive bicycle laws, including the Three Feet for Safety Act and complete streets legislation, recognize cycling as essential transportation deserving protection, not merely recreation tolerating cars' leftover space. Yet enforcement remains sporadic, infrastructure inadequate, and driver attitudes hostile toward cyclists exercising their legal rights to road use."),
        ],
        disclosures: &[],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Bicycle Accident Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Paragraph("Tell us about your crash. We review every bicycle accident case within 24 hours and act immediately to preserve video footage, witness statements and the physical evidence on your bike."),
        ],
        disclosures: &[],
    },
    Section {
        id: "insurance-tactics",
        tab: Some(TabLabel { label: "INSURANCE TACTICS", icon: Icon::Shield }),
        heading: "Fighting Anti-Cyclist Insurance Tactics",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Our former defense attorney experience reveals exactly how insurance companies approach bicycle accident claims with predetermined strategies to minimize compensation. We know their training emphasizes investigating helmet use regardless of injury location, arguing cyclists should use sidewalks despite legal road rights, claiming visibility issues even in broad daylight, and asserting assumption of risk for choosing to cycle."),
            Block::Card {
                title: "Common Bias Tactics",
                lines: &[
                    "\"Cyclists don't belong on roads\"",
                    "Helmet victim-blaming for all injuries",
                    "\"Should have used sidewalk\" arguments",
                    "Visibility questioning in daylight",
                    "\"Assumption of risk\" theories",
                    "Speed differential minimization",
                ],
            },
            Block::Card {
                title: "Our Defense Strategies",
                lines: &[
                    "Legal road rights documentation",
                    "Driver duty violations proof",
                    "Helmet effectiveness limitations",
                    "Infrastructure analysis",
                    "Three-foot law violations",
                    "Cyclist vulnerability emphasis",
                    "This insider knowledge enables us to anticipate and defeat these tactics, transforming what insurers see as easy targets into strong cases demanding fair compensation. We educate all parties about cyclists' legitimate road rights and the severe consequences of driver negligence.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "bicycle-laws",
        tab: Some(TabLabel { label: "BICYCLE LAWS", icon: Icon::Building }),
        heading: "California's Progressive Bicycle Laws",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("California has enacted comprehensive legislation protecting cyclists and establishing clear driver duties. These laws provide strong foundations for bicycle accident claims when properly understood and applied."),
            Block::Card {
                title: "Three Feet for Safety Act",
                lines: &[
                    "Minimum 3-foot passing distance",
                    "Slow down when space insufficient",
                    "Wait for safe passing opportunity",
                    "No unsafe passing allowed",
                    "Enhanced penalties for violations",
                ],
            },
            Block::Card {
                title: "Cyclist Road Rights",
                lines: &[
                    "Full road use rights",
                    "Same traffic law protections",
                    "Lane positioning flexibility",
                    "Intersection right-of-way",
                    "Protection from harassment",
                ],
            },
            Block::Card {
                title: "Infrastructure Requirements",
                lines: &[
                    "Complete Streets policies",
                    "Bike lane maintenance duties",
                    "Safe intersection design",
                    "Adequate signage requirements",
                    "Construction zone protections",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "accident-types",
        tab: Some(TabLabel { label: "ACCIDENT TYPES", icon: Icon::Bike }),
        heading: "California Bicycle Accident Types",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Right Hook Accidents",
                lines: &[
                    "Most common bicycle accident where drivers turn right across cyclists' paths at intersections.",
                    "Intersection right turns",
                    "Driveway and parking lot entries",
                    "Bike lane crossing violations",
                    "Blind spot failures",
                ],
            },
            Block::Card {
                title: "Dooring Incidents",
                lines: &[
                    "Car doors opened into cyclists' paths, particularly dangerous in urban areas with street parking.",
                    "Driver door openings",
                    "Passenger door impacts",
                    "Rideshare passenger exits",
                    "Parked car door zones",
                ],
            },
            Block::Card {
                title: "Left Turn Collisions",
                lines: &[
                    "Drivers turning left into oncoming cyclists, often claiming \"I didn't see the bike.\"",
                    "Intersection left turns",
                    "U-turn collisions",
                    "Parking lot exits",
                    "Driveway departures",
                ],
            },
        ],
        disclosures: &[Disclosure {
            key: "more-accident-types",
            label: "Show More Accident Types",
            blocks: &[
                Block::Card {
                    title: "Close Passing",
                    lines: &[
                        "Vehicles passing too closely, violating California's Three Feet for Safety Act.",
                        "Less than 3-foot clearance",
                        "High-speed passing",
                        "Aggressive driver behavior",
                        "Mirror and door strikes",
                    ],
                },
                Block::Card {
                    title: "Rear-End Collisions",
                    lines: &[
                        "Distracted or impaired drivers striking cyclists from behind, often at traffic lights.",
                        "Stopped at traffic signals",
                        "Slow-moving uphill sections",
                        "Distracted driver strikes",
                        "DUI-related collisions",
                    ],
                },
                Block::Card {
                    title: "Infrastructure Defects",
                    lines: &[
                        "Dangerous road conditions and inadequate bicycle infrastructure causing crashes.",
                        "Bike lane maintenance failures",
                        "Intersection design defects",
                        "Construction zone hazards",
                        "Debris and obstruction",
                    ],
                },
            ],
        }],
    },
    Section {
        id: "injuries",
        tab: Some(TabLabel { label: "INJURIES", icon: Icon::Heart }),
        heading: "Severe Bicycle Accident Injuries",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Bicycle accidents create unique injury patterns reflecting the physics of lightweight bikes versus heavy vehicles. Insurance companies often undervalue these injuries or claim they're \"expected\" from cycling."),
            Block::Card {
                title: "Common Severe Injuries",
                lines: &[
                    "Traumatic brain injuries",
                    "Spinal cord damage",
                    "Clavicle and shoulder fractures",
                    "Severe road rash and scarring",
                    "Hand and wrist injuries",
                    "Facial injuries and dental damage",
                    "Lower extremity fractures",
                    "Internal organ damage",
                ],
            },
            Block::Card {
                title: "Long-Term Consequences",
                lines: &[
                    "Permanent scarring and disfigurement",
                    "Chronic pain conditions",
                    "Limited mobility and function",
                    "Multiple reconstructive surgeries",
                    "Fear of cycling again",
                    "Post-traumatic stress disorder",
                    "Career and lifestyle limitations",
                    "Lost cycling community connection",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "compensation",
        tab: Some(TabLabel { label: "COMPENSATION", icon: Icon::DollarSign }),
        heading: "Comprehensive Compensation for Cyclists",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Bicycle accident cases require specialized understanding of cycling culture, infrastructure, and the unique vulnerabilities cyclists face. We ensure comprehensive compensation addressing all aspects of impact."),
            Block::Card {
                title: "Economic Damages",
                lines: &[
                    "Medical treatment costs",
                    "Lost wages and benefits",
                    "Diminished earning capacity",
                    "Bicycle and equipment replacement",
                    "Transportation alternatives",
                    "Home and workplace modifications",
                    "Ongoing rehabilitation costs",
                ],
            },
            Block::Card {
                title: "Non-Economic Damages",
                lines: &[
                    "Pain and suffering",
                    "Loss of cycling enjoyment",
                    "Disfigurement and scarring",
                    "Emotional distress",
                    "Loss of life activities",
                    "Family relationship impact",
                    "Community connection loss",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "faq",
        tab: Some(TabLabel { label: "FAQ", icon: Icon::HelpCircle }),
        heading: "Bicycle Accident FAQs",
        kind: SectionKind::Faq(FaqSection {
            preview: Some(6),
            view_all: None,
        }),
        blocks: &[],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I have a case if I wasn't wearing a helmet?",
        answer: "Yes. California only requires helmets for riders under 18, and not wearing one does not give a driver permission to hit you. A helmet can only matter for head injuries, so insurers who raise it against a broken leg or road rash are overreaching. We push back on helmet victim-blaming in every case.",
    },
    FaqEntry {
        question: "What is the Three Feet for Safety Act?",
        answer: "California requires drivers to leave at least three feet when passing a cyclist. When the road is too narrow, the driver must slow down and wait until passing is safe. A close pass that causes a crash is strong evidence of negligence.",
    },
    FaqEntry {
        question: "Who is liable for a dooring accident?",
        answer: "The person who opened the door usually is. California law prohibits opening a vehicle door into traffic unless it is reasonably safe. Rideshare passengers, their drivers and the companies behind them can all share responsibility.",
    },
    FaqEntry {
        question: "Can I recover compensation if the insurer says I was partly at fault?",
        answer: "Yes. California follows pure comparative fault, so your recovery is reduced by your share of fault but never eliminated. Insurers inflate cyclist fault on purpose, which is why we rebuild the crash from the evidence.",
    },
    FaqEntry {
        question: "What if a pothole or broken bike lane caused my crash?",
        answer: "Cities and counties have a duty to maintain bike lanes and design safe intersections. Claims against a government entity require written notice within 6 months, so these cases need immediate action.",
    },
    FaqEntry {
        question: "How long do I have to file a bicycle accident claim?",
        answer: "Most California personal injury claims must be filed within 2 years of the accident. Claims against public entities require notice within 6 months. Evidence like traffic video disappears much faster, so call us as soon as you can.",
    },
    FaqEntry {
        question: "What damages can an injured cyclist recover?",
        answer: "Economic damages cover medical care, lost wages, reduced earning capacity and replacement of your bicycle and gear. Non-economic damages cover pain and suffering, scarring, emotional distress and the loss of activities like cycling itself.",
    },
    FaqEntry {
        question: "Should I give a recorded statement to the driver's insurance company?",
        answer: "No. Adjusters are trained to collect statements that suggest you were riding unpredictably or could not be seen. Refer them to us and let us handle every communication.",
    },
    FaqEntry {
        question: "What should I do right after a bicycle accident?",
        answer: "Call 911, get medical care and photograph the scene, the vehicle and your injuries. Keep your damaged bike, helmet and clothing exactly as they are. Get the names of witnesses and the driver's insurance details.",
    },
    FaqEntry {
        question: "How much does it cost to hire your firm?",
        answer: "Nothing upfront. We work on contingency, so you pay no fees unless we win your case.",
    },
];
