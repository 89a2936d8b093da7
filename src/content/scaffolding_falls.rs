use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "scaffolding-falls",
    name: "Scaffolding Falls",
    seo: Seo {
        title: "California Scaffolding Fall Lawyers | Construction Accident Attorneys | Trembach Law Firm",
        description: "Injured in a California scaffolding fall? Former defense attorney fights contractors and insurers for maximum compensation beyond workers' comp. Free consultation. No fees unless we win.",
        canonical: "https://www.trembachlawfirm.com/practice-areas/scaffolding-falls",
        structured_data: true,
    },
    hero: Hero {
        title: "California Scaffolding Falls Lawyers",
        tagline: "Former Defense Attorney Fighting for Injured Workers",
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
        blurb: "You pay nothing until we win your case. Contact us today to schedule your FREE consultation.",
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
            CallToAction {
                label: "Compensation Calculator",
                href: "/practice-areas/scaffolding-falls/compensation-calculator",
                icon: Some(Icon::Calculator),
            },
            CallToAction {
                label: "Legal Guidance",
                href: "/practice-areas/scaffolding-falls/legal-guidance",
                icon: Some(Icon::Building),
            },
        ],
        facts: &[
            QuickFact {
                icon: Icon::Clock,
                title: "Time Limit",
                text: "2 years for most third-party claims",
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
        heading: "Don't Wait - Time Limits Apply for California Scaffolding Falls",
        text: "Evidence at construction sites disappears quickly. Contact us today for your free consultation.",
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
    go_back: true,
};

const EVALUATION: &str = "/practice-areas/scaffolding-falls/case-evaluation";

const ACCIDENT_TYPES: &[SelectOption] = &[
    SelectOption { value: "fall-from-scaffolding", label: "Fall from Scaffolding" },
    SelectOption { value: "scaffolding-collapse", label: "Scaffolding Collapse" },
    SelectOption { value: "struck-by-falling-object", label: "Struck by Falling Object" },
    SelectOption { value: "plank-failure", label: "Plank Failure" },
    SelectOption { value: "support-structure-failure", label: "Support Structure Failure" },
    SelectOption { value: "other-scaffolding-accident", label: "Other Scaffolding Accident" },
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
        heading: "California Scaffolding Falls Attorneys",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("If you or a loved one has been injured in a scaffolding fall in California, you're facing one of the most serious workplace hazards in the construction industry. With approximately 2.3 million construction workers regularly using scaffolds, the risk of catastrophic injury or death remains unacceptably high due to safety violations, defective equipment, and inadequate training."),
            Block::Paragraph("At Trembach Law Firm, we understand the urgency of scaffolding fall cases. With our former defense attorney experience and deep understanding of California safety regulations, we're prepared to fight for maximum compensation while you focus on recovery and time with family."),
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Learn More About California Scaffolding Fall Practice",
                blocks: &[
                    Block::Card {
                        title: "Construction Safety Expertise",
                        lines: &[
                            "Our team understands California's complex scaffolding regulations, Cal/OSHA requirements, and the technical aspects of scaffolding system failures that cause catastrophic injuries.",
                        ],
                    },
                    Block::Card {
                        title: "California Project Knowledge",
                        lines: &[
                            "We have extensive knowledge of California's construction sites, major contractors, and the industry practices that lead to scaffolding accidents throughout the state.",
                        ],
                    },
                    Block::Heading("Why Choose Trembach Law Firm?"),
                    Block::Card {
                        title: "Former Defense Experience",
                        lines: &[
                            "Attorney Trembach's background defending companies provides unique insights into corporate defense strategies.",
                        ],
                    },
                    Block::Card {
                        title: "Immediate Action",
                        lines: &[
                            "We understand evidence disappears quickly and take immediate action to preserve scaffolding components and accident scenes.",
                        ],
                    },
                    Block::Card {
                        title: "Technical Expertise",
                        lines: &[
                            "Our team works with scaffolding engineers and safety experts to build compelling liability cases.",
                        ],
                    },
                    Block::Card {
                        title: "No Win, No Fee",
                        lines: &[
                            "We work on contingency - you pay nothing unless we win your case.",
                        ],
                    },
                    Block::Card {
                        title: "Comprehensive California Scaffolding Fall Representation",
                        lines: &[
                            "Scaffolding fall cases in California involve complex technical, legal, and medical factors. Our firm has the resources and expertise to handle every aspect of your case, from identifying all sources of safety violations to working with engineering experts who can clearly explain how scaffold failures caused your injuries.",
                            "California's construction industry spans major metropolitan areas, with significant scaffolding use in:",
                            "High-rise construction in Los Angeles, San Francisco, and San Diego",
                            "Bridge and infrastructure projects throughout the state",
                            "Refinery and industrial facility maintenance",
                            "Hospital and school construction projects",
                            "Commercial and residential developments",
                            "Seismic retrofitting and building renovations",
                            "We investigate every potential source of liability to ensure no responsible party escapes accountability for your injuries. This comprehensive approach often results in higher compensation as we identify multiple defendants and pursue claims through various legal channels including third-party liability claims, product liability actions, and premises liability cases.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Card {
                title: "Get Your Free Consultation",
                lines: &[
                    "Provide some basic information to help us understand your scaffolding accident better.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "diagnosis-steps",
        tab: Some(TabLabel { label: "WHAT TO DO AFTER ACCIDENT", icon: Icon::Stethoscope }),
        heading: "What to Do After Your Scaffolding Fall",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Immediate Medical Steps",
                lines: &[
                    "Seek immediate medical attention even if injuries seem minor",
                    "Request all medical records and diagnostic reports",
                    "Follow all treatment recommendations from specialists",
                    "Document all symptoms and physical limitations",
                ],
            },
            Block::Card {
                title: "Immediate Legal Steps",
                lines: &[
                    "Document the accident scene and scaffolding",
                    "Collect witness contact information",
                    "Report the accident to your supervisor",
                    "Contact an experienced scaffolding attorney immediately",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "diagnosis-steps",
                label: "Learn More About Protecting Your Rights",
                blocks: &[
                    Block::Card {
                        title: "✅ IMMEDIATE STEPS (Do These Now)",
                        lines: &[
                            "Get medical attention immediately",
                            "Photograph the scaffolding and accident scene",
                            "Get witness names and contact information",
                            "Report the accident to your supervisor",
                            "Keep all medical records and bills",
                            "Contact a scaffolding accident attorney",
                            "File workers' compensation claim",
                            "Preserve all safety equipment involved",
                        ],
                    },
                    Block::Card {
                        title: "❌ NEVER DO (Avoid These Actions)",
                        lines: &[
                            "Don't admit fault for the accident",
                            "Don't sign documents without attorney review",
                            "Don't give recorded statements to insurance",
                            "Don't delay medical treatment",
                            "Don't return to work too early",
                            "Don't settle quickly without legal advice",
                            "Don't let evidence disappear",
                            "Don't miss medical appointments",
                        ],
                    },
                    Block::Card {
                        title: "⚠️ Critical Time Limits",
                        lines: &[
                            "California has strict deadlines for scaffolding accident claims. Workers' compensation claims must be reported within 30 days. Personal injury lawsuits generally must be filed within two years. Government claims require notice within six months. Evidence disappears quickly - scaffolding is dismantled, witnesses leave, and companies destroy records. Contact us immediately to protect your rights.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "diagnosis-process",
        tab: Some(TabLabel { label: "INVESTIGATION PROCESS", icon: Icon::Heart }),
        heading: "Scaffolding Accident Investigation Process",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Evidence Preservation",
                lines: &[
                    "Critical evidence must be preserved immediately before it disappears:",
                    "Scaffolding components and connections",
                    "Safety equipment and fall protection",
                    "Inspection records and maintenance logs",
                    "Witness statements and contact information",
                    "Photographs and video documentation",
                    "Weather conditions and site conditions",
                ],
            },
            Block::Card {
                title: "Technical Analysis",
                lines: &[
                    "Our experts analyze all technical aspects:",
                    "Scaffold engineering and load calculations",
                    "Component failure analysis and testing",
                    "Fall trajectory and impact analysis",
                    "Safety equipment performance evaluation",
                    "Code compliance review and violations",
                    "Industry standard comparison",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "investigation-process",
                label: "Learn More About Our Investigation Methods",
                blocks: &[
                    Block::Card {
                        title: "Comprehensive Accident Reconstruction",
                        lines: &[
                            "Our investigation team includes former safety inspectors, scaffolding engineers, and construction experts who understand exactly what evidence to look for and how to preserve it. We move quickly because scaffolding is temporary - structures are dismantled, moved, or modified within days of an accident.",
                        ],
                    },
                    Block::Card {
                        title: "Phase 1: Immediate Evidence Preservation (24-48 hours)",
                        lines: &[
                            "Photograph scaffolding from multiple angles",
                            "Measure and document all components",
                            "Preserve failed or damaged parts",
                            "Interview witnesses while memories are fresh",
                            "Review surveillance footage",
                            "Obtain weather reports and site conditions",
                        ],
                    },
                    Block::Card {
                        title: "Phase 2: Document Collection (1-4 weeks)",
                        lines: &[
                            "Safety inspection records and certifications",
                            "Training documentation for all workers",
                            "Equipment rental and maintenance agreements",
                            "Project specifications and safety plans",
                            "OSHA citations and violation history",
                            "Insurance policies and coverage limits",
                        ],
                    },
                    Block::Card {
                        title: "Phase 3: Expert Analysis (2-6 months)",
                        lines: &[
                            "Engineering analysis of scaffold design and assembly",
                            "Load calculations and stress testing",
                            "Component failure analysis",
                            "Safety code compliance review",
                            "Industry standard comparison",
                            "Accident reconstruction and causation analysis",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "legal-process",
        tab: Some(TabLabel { label: "LEGAL PROCESS", icon: Icon::Shield }),
        heading: "Legal Process for Scaffolding Fall Claims",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Investigation & Evidence (Months 1-3)",
                lines: &[
                    "Immediate preservation of scaffolding components, witness interviews, document collection, expert retention, and liability analysis. Time is critical as evidence disappears quickly.",
                ],
            },
            Block::Card {
                title: "Medical Documentation (Ongoing)",
                lines: &[
                    "Comprehensive medical evaluation, treatment records, prognosis documentation, and future care planning with qualified medical experts.",
                ],
            },
            Block::Card {
                title: "Filing & Discovery (Months 3-12)",
                lines: &[
                    "File lawsuits against all responsible parties, conduct discovery, take depositions, exchange expert reports, and build the strongest possible case.",
                ],
            },
            Block::Card {
                title: "Resolution (Months 6-24)",
                lines: &[
                    "Negotiate settlements or proceed to trial. Most cases settle, but trial preparation is essential for maximum compensation.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "faq",
        tab: Some(TabLabel { label: "FAQ", icon: Icon::MessageCircle }),
        heading: "Frequently Asked Questions",
        kind: SectionKind::Faq(FaqSection {
            preview: Some(10),
            view_all: None,
        }),
        blocks: &[
        ],
        disclosures: &[],
    },
    Section {
        id: "resources",
        tab: Some(TabLabel { label: "RESOURCES", icon: Icon::Building }),
        heading: "Scaffolding Safety Resources",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Heading("Legal Resources"),
            Block::Card {
                title: "Safety Information",
                lines: &[
                    "Cal/OSHA Scaffolding Standards",
                    "OSHA Construction Safety Guide",
                    "Worker Rights After Injury",
                    "Safety Violation Reporting",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "time-limits",
        tab: None,
        heading: "California Time Limits for Scaffolding Claims",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Don't Wait - Time Limits Apply for California Scaffolding Falls",
                lines: &[
                    "California law imposes strict deadlines for scaffolding fall claims. Missing these deadlines can forever bar your right to compensation, even for the most serious injuries.",
                    "Personal Injury Claims: Generally 2 years from the date of accident",
                    "Workers' Compensation: Must report within 30 days, file within 1 year",
                    "Government Claims: Notice required within 6 months",
                    "Product Liability: 2 years from discovery of defect",
                    "Wrongful Death: 2 years from date of death",
                ],
            },
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What should I do immediately after a scaffolding fall accident?",
        answer: "Seek immediate medical attention even if injuries seem minor - adrenaline can mask serious injuries. Report the accident to your supervisor and ensure an incident report is filed. Document everything: photograph the scaffolding, accident scene, your injuries, and safety equipment. Collect witness contact information. Do not admit fault or sign any documents beyond basic incident reports. Contact an experienced scaffolding accident attorney immediately to preserve evidence and protect your rights.",
    },
    FaqEntry {
        question: "How long do I have to file a scaffolding accident lawsuit in California?",
        answer: "California's statute of limitations for personal injury claims is generally two years from the date of the accident. However, exceptions exist: if injuries aren't immediately apparent, the clock may start when injuries are discovered. Government entity claims require filing within six months. Workers' compensation claims must be reported to employers within 30 days and filed within one year. Time limits are strict, so contact an attorney immediately.",
    },
    FaqEntry {
        question: "Can I sue if I'm already receiving workers' compensation benefits?",
        answer: "Yes, if third parties caused your scaffolding fall. Workers' compensation prevents suing your direct employer but doesn't bar claims against general contractors, subcontractors, equipment manufacturers, property owners, or scaffolding companies. Third-party claims can provide full wage replacement, pain and suffering damages, and punitive damages not available through workers' comp. Your employer may have a lien on third-party recoveries for benefits paid.",
    },
    FaqEntry {
        question: "Who can be held liable for my scaffolding fall accident?",
        answer: "Multiple parties may be liable: general contractors responsible for overall site safety, scaffolding companies that erected or maintained the structure, equipment manufacturers if components were defective, property owners who retained control over safety, other subcontractors who created dangerous conditions, and safety companies responsible for training or inspection. Our investigation identifies all potentially liable parties to maximize your compensation.",
    },
    FaqEntry {
        question: "What if the scaffolding collapse was caused by my own mistake?",
        answer: "California follows pure comparative negligence, allowing recovery even if you were partially at fault. Your compensation reduces by your percentage of fault. For example, if total damages are $1 million and you're found 20% at fault, you'd recover $800,000. Often, apparent 'worker error' results from inadequate training, defective equipment, or unsafe conditions created by others. We investigate thoroughly to minimize any fault attributed to you.",
    },
    FaqEntry {
        question: "How much is my scaffolding fall case worth?",
        answer: "Case value depends on injury severity, liability strength, available insurance, lost wages, medical expenses, pain and suffering, and long-term impacts. Mild injuries might recover $50,000-200,000, while catastrophic injuries like paralysis or brain damage can exceed $5-15 million. We work with medical experts, life care planners, and economists to fully document your damages and maximize compensation. Each case is unique and requires individual evaluation.",
    },
    FaqEntry {
        question: "What safety violations commonly cause scaffolding falls?",
        answer: "Common violations include: inadequate fall protection systems, missing or damaged guardrails, improper scaffold assembly, defective planking, insufficient bracing, overloading, using damaged components, inadequate access methods, poor weather protections, lack of training, missing safety equipment, and failure to inspect daily. Cal/OSHA requires specific safety measures that, when violated, create strong liability cases for injured workers.",
    },
    FaqEntry {
        question: "Do I need an attorney for a scaffolding accident claim?",
        answer: "Absolutely. Scaffolding cases involve complex liability issues, multiple defendants, technical safety regulations, and substantial damages. Insurance companies deploy teams of lawyers and experts to minimize payouts. You need experienced legal representation to level the playing field, preserve evidence, identify all liable parties, and maximize compensation. Our former defense attorney experience gives us unique insight into insurance company tactics and strategies.",
    },
    FaqEntry {
        question: "What evidence is important in scaffolding fall cases?",
        answer: "Critical evidence includes: accident scene photographs, scaffolding inspection records, safety training documentation, witness statements, OSHA reports and citations, equipment maintenance logs, weather conditions, project specifications, safety meeting minutes, and surveillance footage. Evidence deteriorates quickly - scaffolding is dismantled, witnesses disperse, and companies destroy records. Immediate legal action is essential to preserve crucial evidence.",
    },
    FaqEntry {
        question: "Can I recover compensation if I was injured by falling objects from scaffolding?",
        answer: "Yes, both workers and pedestrians injured by falling objects have valid claims. Scaffolding users must secure tools and materials, provide toeboards, use safety nets, and warn people below. Struck-by injuries can cause severe head trauma, fractures, and death. We pursue claims against scaffold users, general contractors, and others responsible for maintaining safe conditions around scaffolding operations.",
    },
    FaqEntry {
        question: "What types of scaffolding accidents are most common in California?",
        answer: "Most common types include: falls from working platforms due to missing guardrails, scaffold collapses from structural failures, plank failures causing workers to fall through, falls during assembly or dismantling, electrocution from power line contact, being struck by falling tools or materials, slips on wet or icy surfaces, and falls through unprotected openings. Each type requires different investigation approaches and liability theories.",
    },
    FaqEntry {
        question: "How are scaffolding accident cases different from other construction accidents?",
        answer: "Scaffolding cases involve specialized regulations, multiple assembly components, temporary structures with inherent instability, height-related fall risks, and multiple parties responsible for design, assembly, inspection, and use. Technical expertise in scaffolding systems, OSHA standards, and engineering principles is essential. The temporary nature of scaffolding means evidence disappears quickly, making immediate investigation critical.",
    },
    FaqEntry {
        question: "What should I know about Cal/OSHA scaffolding regulations?",
        answer: "Cal/OSHA requires scaffolds for work where permanent structures are less than 20 inches wide, permits for scaffolding over 36 feet, qualified person supervision, daily inspections, specific load limits, proper access methods, fall protection at 10+ feet, and comprehensive safety training. Violations of these regulations create strong evidence of negligence in injury claims. We're experts in California scaffolding law and safety standards.",
    },
    FaqEntry {
        question: "Can family members sue if someone dies in a scaffolding fall?",
        answer: "Yes, California's wrongful death statute allows surviving spouses, children, and dependents to recover funeral expenses, lost financial support, loss of companionship, and household services. Wrongful death claims can be filed against any party whose negligence contributed to the fatal fall. These cases require sensitive handling and comprehensive evaluation of the deceased's life expectancy, earning capacity, and family relationships.",
    },
    FaqEntry {
        question: "What role do safety inspections play in scaffolding accident cases?",
        answer: "OSHA and Cal/OSHA require daily scaffolding inspections by competent persons before each work shift and after any incident that could affect safety. Inspection records, or lack thereof, provide crucial evidence of negligence. We analyze inspection documentation, interview inspectors, and determine whether proper safety protocols were followed. Missing or inadequate inspections often indicate systemic safety failures.",
    },
    FaqEntry {
        question: "How do weather conditions affect scaffolding accident liability?",
        answer: "Employers must cease scaffolding work during dangerous weather conditions including high winds, storms, ice, and low visibility. Cal/OSHA prohibits work on scaffolds during winds exceeding 25 mph unless specifically designed for higher speeds. Failing to stop work or secure scaffolding during bad weather creates liability for resulting accidents. Weather-related scaffolding violations often involve inadequate planning and pressure to meet deadlines.",
    },
    FaqEntry {
        question: "What compensation can I receive for scaffolding fall injuries?",
        answer: "Economic damages include medical expenses, lost wages, reduced earning capacity, vocational rehabilitation, home modifications, and ongoing care needs. Non-economic damages cover pain and suffering, emotional distress, loss of enjoyment of life, and disability. California has no caps on non-economic damages in personal injury cases. Punitive damages may be available for willful safety violations or egregious conduct.",
    },
    FaqEntry {
        question: "How long does a scaffolding accident case take to resolve?",
        answer: "Case duration varies widely based on injury severity, liability complexity, and defendant cooperation. Simple cases may settle within 6-18 months, while complex cases with catastrophic injuries can take 2-4 years. We work to resolve cases as quickly as possible while ensuring maximum compensation. Early settlement offers are often inadequate and don't account for long-term consequences.",
    },
    FaqEntry {
        question: "What if the scaffolding equipment was defective?",
        answer: "Product liability claims can be filed against manufacturers, distributors, and retailers of defective scaffolding components. Defects may include design flaws, manufacturing errors, inadequate warnings, or failure to meet safety standards. Product liability cases often result in significant compensation and don't require proving negligence - only that the product was unreasonably dangerous when used as intended.",
    },
    FaqEntry {
        question: "Can I switch attorneys if I'm unhappy with my current representation?",
        answer: "Yes, you have the right to change attorneys at any time. We frequently take over scaffolding cases from attorneys who lack specialized experience in construction accidents. Our former defense attorney background and technical expertise often result in significantly better outcomes. We handle all transfer procedures and ensure continuity in your case.",
    },
    FaqEntry {
        question: "What costs are involved in pursuing a scaffolding accident case?",
        answer: "We work on contingency fees, meaning you pay nothing unless we win your case. We advance all costs for investigation, expert witnesses, medical records, depositions, and trial preparation. Our fee is a percentage of your recovery, and we only get paid if you receive compensation. This arrangement allows injured workers to pursue claims regardless of their financial situation.",
    },
    FaqEntry {
        question: "How do I prove my scaffolding fall was caused by safety violations?",
        answer: "We work with scaffolding safety experts, engineers, and OSHA specialists to analyze accident causes and identify violations. Evidence includes OSHA citations, safety inspection records, training documentation, industry standards, and expert testimony. Our technical team reconstructs accidents to demonstrate how safety violations directly caused your injuries.",
    },
    FaqEntry {
        question: "What if I was working without proper documentation?",
        answer: "Immigration status doesn't affect your right to workers' compensation or personal injury claims in California. Undocumented workers are entitled to the same legal protections as other employees. We maintain strict confidentiality and focus on your legal rights rather than immigration issues. Your safety and compensation rights are protected regardless of documentation status.",
    },
    FaqEntry {
        question: "Can I pursue a claim if I was injured while working for a subcontractor?",
        answer: "Yes, subcontractor employees can pursue third-party claims against general contractors, other subcontractors, property owners, and equipment manufacturers. The general contractor often has overall responsibility for site safety, creating liability for subcontractor injuries. We analyze all contractual relationships and safety responsibilities to identify liable parties.",
    },
    FaqEntry {
        question: "What if my employer tries to cover up the scaffolding accident?",
        answer: "Employer cover-ups are unfortunately common and may constitute additional violations. We work to uncover the truth through independent investigation, witness interviews, document preservation, and OSHA reporting. Attempts to conceal accidents or intimidate witnesses can result in additional liability and punitive damages.",
    },
    FaqEntry {
        question: "How do Cal/OSHA requirements differ from federal OSHA standards?",
        answer: "California maintains its own occupational safety program (Cal/OSHA) that often exceeds federal requirements. Cal/OSHA has specific scaffolding regulations, stricter enforcement, higher penalties, and additional worker protections. We're experts in both state and federal scaffolding standards and use the most stringent applicable requirements to build your case.",
    },
    FaqEntry {
        question: "What if multiple workers were injured in the same scaffolding accident?",
        answer: "Mass scaffolding accidents often result in multiple lawsuits against the same defendants. We coordinate with other injured workers while maintaining individual representation. Collective action can strengthen liability arguments and increase pressure for fair settlements. Each worker's case is evaluated individually to ensure maximum compensation.",
    },
    FaqEntry {
        question: "Can I be fired for filing a scaffolding accident claim?",
        answer: "California law prohibits retaliation against workers who file injury claims or report safety violations. Wrongful termination for exercising legal rights creates additional claims for lost wages, emotional distress, and punitive damages. We protect your employment rights while pursuing your injury claim.",
    },
    FaqEntry {
        question: "What role do safety training records play in scaffolding cases?",
        answer: "Inadequate safety training is a common factor in scaffolding accidents. We review training records, curricula, attendance documentation, and competency testing. Lack of proper training creates liability for employers and demonstrates negligence. We work with safety experts to establish industry training standards and identify deficiencies.",
    },
    FaqEntry {
        question: "How do insurance companies handle scaffolding accident claims?",
        answer: "Insurance companies use teams of lawyers, experts, and investigators to minimize payouts. They may dispute liability, claim pre-existing injuries, argue comparative fault, or pressure for quick settlements. Our former defense attorney experience gives us unique insight into insurance tactics, allowing us to counter their strategies effectively.",
    },
    FaqEntry {
        question: "What if the scaffolding accident occurred on government property?",
        answer: "Government entity claims have special requirements including shorter filing deadlines (6 months), specific notice procedures, and potential immunity defenses. Public works projects often have additional safety requirements and oversight. We're experienced in government liability cases and understand the unique challenges involved.",
    },
    FaqEntry {
        question: "Can I recover compensation for future medical expenses?",
        answer: "Yes, California law allows recovery for all reasonable future medical expenses related to your scaffolding injuries. We work with medical experts and life care planners to project your long-term treatment needs, rehabilitation requirements, and ongoing care costs. Future medical expenses often represent the largest component of catastrophic injury settlements.",
    },
    FaqEntry {
        question: "What if the scaffolding accident was caused by design defects?",
        answer: "Design defect claims can be pursued against architects, engineers, and contractors responsible for scaffolding specifications. Design defects may include inadequate load calculations, improper materials specification, or failure to account for environmental conditions. These cases require technical experts to establish industry standards and identify deviations.",
    },
    FaqEntry {
        question: "How do I document my injuries after a scaffolding fall?",
        answer: "Seek immediate medical attention and follow all treatment recommendations. Keep detailed records of medical appointments, treatments, medications, and symptoms. Document how injuries affect your daily activities, work capacity, and quality of life. Medical documentation forms the foundation of your damage claims and should be comprehensive and consistent.",
    },
    FaqEntry {
        question: "What if I was partially responsible for the scaffolding accident?",
        answer: "California's pure comparative negligence system allows recovery even if you were partially at fault. Your compensation is reduced by your percentage of fault, but you can still recover substantial damages. We work to minimize any fault attributed to you by demonstrating how safety violations, inadequate training, or defective equipment contributed to your accident.",
    },
    FaqEntry {
        question: "Can I pursue a claim if the scaffolding contractor is uninsured?",
        answer: "Uninsured contractors create challenges but don't eliminate your options. We identify all potentially liable parties, including general contractors, property owners, and equipment suppliers who may have insurance coverage. We also explore bond claims, personal assets, and alternative compensation sources to ensure recovery.",
    },
    FaqEntry {
        question: "What if my scaffolding accident happened years ago?",
        answer: "California's statute of limitations may bar claims filed too late, but exceptions exist for delayed injury discovery or fraudulent concealment. Even if personal injury claims are time-barred, workers' compensation claims may still be available. Contact us immediately to evaluate your options - time limits are strictly enforced.",
    },
    FaqEntry {
        question: "How do expert witnesses help in scaffolding accident cases?",
        answer: "Expert witnesses provide crucial testimony on industry standards, safety violations, accident causation, and injury consequences. We work with scaffolding engineers, safety experts, medical specialists, economists, and life care planners. Expert testimony often determines case outcomes and is essential for maximum compensation.",
    },
    FaqEntry {
        question: "What if the general contractor blames the scaffolding subcontractor?",
        answer: "Finger-pointing between defendants is common in scaffolding cases. We pursue all potentially liable parties and let them fight over responsibility while ensuring your compensation. General contractors often retain overall safety responsibility even when subcontractors perform specific work. Our investigation establishes each party's role and liability.",
    },
    FaqEntry {
        question: "Can I recover compensation for my family's losses?",
        answer: "Yes, California law allows recovery for loss of consortium (spousal companionship), family services, and emotional distress suffered by family members. Serious injuries affect entire families, and the law recognizes these losses. Family members may also recover for their own medical expenses related to the trauma of your accident.",
    },
    FaqEntry {
        question: "What if the scaffolding accident was caused by rushed work schedules?",
        answer: "Schedule pressure that compromises safety creates liability for employers and general contractors. We investigate project timelines, deadline pressures, and whether safety shortcuts were taken to meet schedules. Evidence of rushing work or pressuring workers to ignore safety procedures strengthens liability arguments and may support punitive damages.",
    },
    FaqEntry {
        question: "How do workplace safety violations affect my case?",
        answer: "OSHA and Cal/OSHA violations create strong evidence of negligence and provide blueprints for liability arguments. Violation citations, inspection reports, and penalty assessments demonstrate acknowledged safety failures. We use regulatory violations to establish duty, breach, and causation in your injury claim.",
    },
    FaqEntry {
        question: "What if I need ongoing medical treatment for my scaffolding injuries?",
        answer: "We work with medical experts to develop comprehensive life care plans that account for all future treatment needs. This includes surgeries, rehabilitation, medications, equipment, and supportive care. Future medical expenses are included in settlement demands and trial presentations to ensure adequate compensation for lifelong care.",
    },
    FaqEntry {
        question: "Can I pursue claims against multiple defendants?",
        answer: "Yes, scaffolding accidents often involve multiple liable parties including general contractors, subcontractors, equipment manufacturers, property owners, and safety companies. We pursue all responsible parties to maximize compensation and ensure adequate coverage for your damages. Joint liability often results in higher settlements.",
    },
    FaqEntry {
        question: "What happens if the scaffolding company goes out of business?",
        answer: "Business closures don't necessarily eliminate liability. We investigate insurance coverage, bonding, successor liability, and personal guarantees. Assets may be available through dissolution proceedings or successor companies. We also pursue other liable parties to ensure compensation despite one defendant's unavailability.",
    },
    FaqEntry {
        question: "How do I know if my attorney is qualified to handle scaffolding cases?",
        answer: "Look for attorneys with specific construction accident experience, technical knowledge of scaffolding systems, OSHA expertise, and proven results in similar cases. Our firm's former defense attorney background provides unique insights into how these cases are defended, giving us significant advantages in building winning strategies.",
    },
    FaqEntry {
        question: "What if I can't afford to miss work for medical appointments and legal proceedings?",
        answer: "We understand the financial pressures injured workers face. We accommodate your schedule, handle proceedings efficiently, and work to secure interim financial support through workers' compensation or settlement advances. Your health and recovery take priority, and we minimize disruption to your recovery process.",
    },
    FaqEntry {
        question: "Can I settle my case and still receive workers' compensation benefits?",
        answer: "Yes, but coordination is required. Your employer typically has a lien on third-party settlements for workers' compensation benefits paid. We negotiate lien reductions and structure settlements to maximize your net recovery while protecting future benefits. Medical care coordination is also important for ongoing treatment.",
    },
    FaqEntry {
        question: "What if new injuries develop after my scaffolding accident settlement?",
        answer: "Settlements typically require releases that may bar future claims for the same incident. However, if new injuries are truly unforeseeable or result from different causes, additional claims may be possible. We carefully review settlement terms and advise on protecting rights for potential future complications.",
    },
    FaqEntry {
        question: "How do I deal with bill collectors while my case is pending?",
        answer: "Medical providers often wait for case resolution, and we help coordinate payment arrangements. Workers' compensation should cover medical expenses, and health insurance may provide temporary coverage. We provide letters confirming pending litigation to help manage creditor demands while your case proceeds.",
    },
    FaqEntry {
        question: "What should I do if insurance companies contact me directly?",
        answer: "Never provide statements or sign documents without attorney review. Insurance companies often seek early statements to limit liability or pressure for quick settlements. Refer all insurance contacts to our office and avoid discussing your accident, injuries, or treatment with anyone except your medical providers and legal team.",
    },
];
