use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "bus-accidents",
    name: "Bus Accidents",
    seo: Seo {
        title: "California Bus Accident Lawyers | MTA, School & Charter Bus Attorneys | Trembach Law Firm",
        description: "Injured in a California bus accident? 6-month deadline for government claims. Former defense attorney fights MTA, school districts & bus companies. Free 24/7 consultation. No fees unless we win.",
        canonical: "https://www.trembachlawfirm.com/practice-areas/bus-accidents",
        structured_data: true,
    },
    hero: Hero {
        title: "California Bus Accident Lawyers",
        tagline: "Former Defense Attorney Advantage",
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
        submit_label: "Get My Free Case Evaluation",
        policy: SubmitPolicy::Navigate(EVALUATION),
    }),
    sidebar: Sidebar {
        blurb: "You pay nothing until we win your case. Contact us today to schedule your FREE consultation.",
        actions: &[
            CallToAction {
                label: "Call (855) 985-1234",
                href: "tel:8559851234",
                icon: Some(Icon::Phone),
            },
            CallToAction {
                label: "Compensation Calculator",
                href: "/bus-accident/compensation-calculator",
                icon: Some(Icon::Calculator),
            },
            CallToAction {
                label: "Legal Guidance",
                href: "/bus-accident/legal-guidance",
                icon: Some(Icon::Mail),
            },
        ],
        facts: &[
            QuickFact {
                icon: Icon::Clock,
                title: "Time Limit",
                text: "6 months for government claims",
            },
            QuickFact {
                icon: Icon::Shield,
                title: "No Win, No Fee",
                text: "We only get paid if you win",
            },
            QuickFact {
                icon: Icon::Award,
                title: "Free Consultation",
                text: "No cost to discuss your case",
            },
        ],
    },
    closing: Closing {
        heading: "Don't Wait - Time Limits Apply for California Bus Accidents",
        text: "California law gives you only 6 months to file claims against government entities. Contact us today for your free consultation.",
        actions: &[
            CallToAction {
                label: "CALL (855) 985-1234",
                href: "tel:8559851234",
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

const EVALUATION: &str = "/bus-accident/case-evaluation";

const BUS_TYPES: &[SelectOption] = &[
    SelectOption { value: "mta", label: "MTA/Public Transit" },
    SelectOption { value: "school", label: "School Bus" },
    SelectOption { value: "charter", label: "Charter/Tour Bus" },
    SelectOption { value: "shuttle", label: "Private Shuttle" },
    SelectOption { value: "other", label: "Other" },
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
        name: "busType",
        label: "Type of Bus",
        kind: FieldKind::Select(BUS_TYPES),
        placeholder: "Select bus type...",
        required: false,
    },
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "California Bus Accident Attorneys",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("If you or a loved one has been injured in a bus accident in California, you're facing complex legal challenges with strict deadlines that could permanently eliminate your right to compensation. Bus accidents involving government entities like MTA, school districts, and public transit systems require filing a claim within just 6 months - missing this deadline typically bars your case forever."),
            Block::Paragraph("At Trembach Law Firm, we understand the urgency and complexity of California bus accident cases. With our former defense attorney experience and deep knowledge of common carrier laws, we're uniquely positioned to fight for maximum compensation while you focus on recovery."),
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Learn More About Our California Bus Accident Practice",
                blocks: &[
                    Block::Card {
                        title: "Common Carrier Expertise",
                        lines: &[
                            "We understand California's strict \"utmost care and diligence\" standard that applies to all bus operators, making it easier to prove liability than regular car accidents.",
                        ],
                    },
                    Block::Card {
                        title: "6-Month Deadline Experts",
                        lines: &[
                            "We immediately file government claims to preserve your rights while investigating your case thoroughly to build the strongest possible claim.",
                        ],
                    },
                    Block::Heading("Why Choose Trembach Law Firm for Bus Accidents?"),
                    Block::Card {
                        title: "Former Defense Experience",
                        lines: &[
                            "Attorney Trembach's background defending transit companies provides unique insights into their defense strategies.",
                        ],
                    },
                    Block::Card {
                        title: "Urgent Response",
                        lines: &[
                            "We act immediately to preserve evidence and meet critical government claim deadlines.",
                        ],
                    },
                    Block::Card {
                        title: "Compassionate Support",
                        lines: &[
                            "We understand the trauma of bus accidents and provide support throughout your recovery.",
                        ],
                    },
                    Block::Card {
                        title: "No Win, No Fee",
                        lines: &[
                            "We work on contingency - you pay nothing unless we win your case.",
                        ],
                    },
                    Block::Card {
                        title: "Comprehensive California Bus Accident Representation",
                        lines: &[
                            "Bus accidents in California involve complex legal issues requiring immediate action and specialized knowledge. Our firm handles every type of bus accident case, from MTA collisions to school bus incidents to charter bus crashes.",
                            "California's extensive public transportation network includes major systems where accidents commonly occur:",
                            "Los Angeles Metro (MTA) bus and rapid transit",
                            "San Francisco Muni and BART feeder buses",
                            "Orange County Transportation Authority (OCTA)",
                            "School district buses throughout California",
                            "Charter and tour bus companies",
                            "Private shuttle services",
                            "We investigate every aspect of your accident to identify all liable parties and pursue maximum compensation through multiple legal channels. Our comprehensive approach often reveals additional defendants and insurance coverage that less experienced attorneys miss.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Bus Accident Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Paragraph("Get an immediate assessment of your bus accident case. Our evaluation considers the unique aspects of California common carrier law and government liability."),
            Block::Card {
                title: "Immediate Response",
                lines: &[
                    "We evaluate your case within 24 hours and take immediate action to preserve your rights.",
                ],
            },
            Block::Card {
                title: "Government Claim Filing",
                lines: &[
                    "If your accident involves a government entity, we immediately file the required claim to meet the 6-month deadline.",
                ],
            },
            Block::Card {
                title: "Evidence Preservation",
                lines: &[
                    "We secure surveillance video, witness statements, and accident reports before they're lost or destroyed.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "steps-after",
        tab: Some(TabLabel { label: "WHAT TO DO AFTER ACCIDENT", icon: Icon::Stethoscope }),
        heading: "What to Do After a California Bus Accident",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Seek Immediate Medical Attention",
                lines: &[
                    "Get medical evaluation even if you feel fine. Bus accident injuries often have delayed symptoms, and prompt medical documentation strengthens your case.",
                ],
            },
            Block::Card {
                title: "Document Everything",
                lines: &[
                    "Take photos of the scene, your injuries, and damage. Get contact information from witnesses and other passengers. Note weather and road conditions.",
                ],
            },
            Block::Card {
                title: "Call an Attorney Immediately",
                lines: &[
                    "Contact us within 24 hours. The 6-month government claim deadline is strict, and evidence disappears quickly. Early attorney involvement is crucial.",
                ],
            },
            Block::Card {
                title: "DON'T Make These Mistakes",
                lines: &[
                    "Don't sign anything without attorney review",
                    "Don't give recorded statements to insurance companies",
                    "Don't accept quick settlement offers",
                    "Don't wait to seek medical treatment",
                    "Don't assume the 6-month deadline doesn't apply",
                ],
            },
            Block::Heading("Critical Time Limits"),
        ],
        disclosures: &[],
    },
    Section {
        id: "process",
        tab: Some(TabLabel { label: "COMMON INJURIES", icon: Icon::Heart }),
        heading: "Common Bus Accident Injuries",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Bus accidents cause unique and often severe injuries due to the size disparity with other vehicles, lack of seatbelts, and the presence of standing passengers. Understanding these common injuries helps ensure you receive proper medical evaluation and compensation."),
        ],
        disclosures: &[
            Disclosure {
                key: "injuries",
                label: "Learn More About Bus Accident Injuries",
                blocks: &[
                    Block::Card {
                        title: "Traumatic Brain Injuries",
                        lines: &[
                            "Standing passengers often strike poles, seats, or windows during sudden stops or collisions. Even seemingly minor head impacts can cause concussions, memory problems, and cognitive difficulties requiring extensive rehabilitation.",
                        ],
                    },
                    Block::Card {
                        title: "Spinal Cord Injuries",
                        lines: &[
                            "The violent motions in bus crashes frequently cause herniated discs, fractured vertebrae, and spinal cord damage leading to paralysis. These life-altering injuries require immediate specialized treatment.",
                        ],
                    },
                    Block::Card {
                        title: "Fractures and Broken Bones",
                        lines: &[
                            "Passengers thrown during impacts commonly suffer broken ribs, arms, legs, and hip fractures. Elderly passengers are particularly vulnerable to complex fractures requiring surgery and extended recovery.",
                        ],
                    },
                    Block::Card {
                        title: "Internal Injuries",
                        lines: &[
                            "Blunt force trauma can cause internal bleeding, organ damage, and life-threatening injuries that may not be immediately apparent. Prompt medical evaluation is crucial for detecting these hidden injuries.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "faq",
        tab: Some(TabLabel { label: "FAQ", icon: Icon::MessageCircle }),
        heading: "California Bus Accident FAQs",
        kind: SectionKind::Faq(FaqSection {
            preview: None,
            view_all: Some(CallToAction {
                label: "View All 50+ Bus Accident FAQs",
                href: "/bus-accident/faq",
                icon: None,
            }),
        }),
        blocks: &[
            Block::Paragraph("Get answers to over 50 common questions about bus accident claims in California"),
        ],
        disclosures: &[],
    },
    Section {
        id: "resources",
        tab: Some(TabLabel { label: "RESOURCES", icon: Icon::Building }),
        heading: "California Bus Accident Resources",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Legal Resources",
                lines: &[
                    "California Department of Insurance",
                    "CPUC Transit Regulations",
                    "California Vehicle Code",
                    "State Bar of California",
                ],
            },
            Block::Card {
                title: "Medical Resources",
                lines: &[
                    "California Hospital Association",
                    "Trauma Recovery Centers",
                    "Mental Health Services",
                    "Rehabilitation Specialists",
                ],
            },
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What's the deadline to file a bus accident claim in California?",
        answer: "The deadline depends on who operated the bus: Government buses (MTA, school, city): You must file a government claim within 6 MONTHS of the accident. If denied, you have 6 months from denial to file a lawsuit. Private buses: You generally have 2 years to file a lawsuit. Federal vehicles: 2 years under the Federal Tort Claims Act. Missing the 6-month government deadline usually eliminates your right to compensation entirely. Contact an attorney immediately to protect your rights.",
    },
    FaqEntry {
        question: "What if I was standing when the bus crashed?",
        answer: "Standing passengers often suffer the most severe injuries since they have nothing to protect them during sudden stops or collisions. Common carriers must protect standing passengers by avoiding sudden acceleration or braking when possible, warning passengers before unavoidable sudden movements, ensuring handrails and straps work properly, and not exceeding standing passenger capacity. The bus company can't blame you for standing when seats weren't available or when you were preparing to exit.",
    },
    FaqEntry {
        question: "Can I sue if the bus driver slammed on brakes and I got hurt?",
        answer: "Yes. While drivers sometimes must brake suddenly for safety, they're liable if the sudden stop was due to following too closely, distracted driving, speeding requiring emergency braking, failing to warn passengers when possible, or poor route planning creating dangerous situations. Even if braking was necessary, the bus company may be liable if passengers weren't given adequate handholds or if the bus was overcrowded.",
    },
    FaqEntry {
        question: "What damages can I recover from a California bus accident?",
        answer: "California bus accident victims can recover: Medical expenses (emergency care, surgery, medication, physical therapy, future treatments), Lost wages (time missed from work, reduced earning capacity, lost benefits), Pain and suffering (physical pain, emotional distress, loss of enjoyment of life), Property damage (damaged belongings, clothing, electronics), Disability/disfigurement compensation for permanent injuries, Wrongful death (funeral costs, lost support, loss of companionship), and Punitive damages for extremely reckless conduct (rare against government).",
    },
    FaqEntry {
        question: "What if I can't afford medical treatment after a bus accident?",
        answer: "Don't let lack of insurance or money prevent you from getting treatment. We connect you with doctors who provide treatment on a lien basis (paid from settlement), emergency rooms must treat you regardless of ability to pay, many providers will wait for payment pending your case, your health insurance should cover treatment (they'll seek reimbursement from settlement), and some government programs provide immediate assistance. Getting prompt treatment is crucial for your health and your case.",
    },
    FaqEntry {
        question: "Do I need a lawyer for a bus accident claim?",
        answer: "While not legally required, bus accident cases involve complexities making legal representation crucial including strict 6-month deadline for government claims, multiple potentially liable parties, complex common carrier laws, aggressive insurance company tactics, need for accident reconstruction experts, and governmental immunity issues. Studies show represented victims receive 3-5 times more compensation than those without attorneys, even after legal fees.",
    },
    FaqEntry {
        question: "What's California's common carrier law for buses?",
        answer: "California Civil Code 2100 requires common carriers (including all buses) to use 'utmost care and diligence' for passenger safety. This means a higher standard than regular 'reasonable care,' must do everything reasonably possible to prevent harm, liable for even slight negligence, must provide safe vehicles and competent drivers, and must protect passengers from other passengers' misconduct. This strict standard makes it easier to prove bus company liability compared to regular auto accidents.",
    },
    FaqEntry {
        question: "Can I sue a school district for a school bus accident?",
        answer: "Yes, but special rules apply: Must file government claim within 6 months, districts have some governmental immunities, cannot get punitive damages, damage caps may apply in some situations, and must prove district negligence (not just driver error). School districts are liable for inadequate driver training, poor supervision, dangerous routes, or failing to protect students. California law provides special protections for injured children.",
    },
    FaqEntry {
        question: "What if the bus accident wasn't the driver's fault?",
        answer: "You may still have claims against the bus company for failing to avoid the accident or protect passengers, other drivers who caused the collision, government entities for dangerous road conditions, and manufacturers for defective bus parts that worsened injuries. Even when not at fault, bus companies must take reasonable steps to avoid accidents and minimize passenger injuries. The lack of seatbelts often makes them partially liable.",
    },
    FaqEntry {
        question: "How much is my bus accident case worth?",
        answer: "Case values vary greatly based on severity of injuries (TBI and spinal injuries often exceed $1 million), age and income of victim, fault determination, available insurance coverage, and government vs. private liability. Our former defense experience helps us accurately evaluate cases and pursue maximum compensation from all available sources.",
    },
];
