use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "hearing-loss",
    name: "Hearing Loss",
    seo: Seo {
        title: "California Hearing Loss Attorneys | Industrial Deafness Lawyers | Trembach Law Firm",
        description: "California hearing loss lawyers fighting for victims of workplace noise exposure, acoustic trauma, and accident-related deafness. Free consultation. No fees unless we win your case.",
        canonical: "https://www.trembachlawfirm.com/practice-areas/hearing-loss",
        structured_data: true,
    },
    hero: Hero {
        title: "California Hearing Loss Attorneys",
        tagline: "Former Defense Attorney Fighting for Hearing Loss Victims",
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
                label: "Compensation Calculator",
                href: "/practice-areas/hearing-loss/compensation-calculator",
                icon: Some(Icon::Calculator),
            },
            CallToAction {
                label: "Legal Guidance",
                href: "/practice-areas/hearing-loss/legal-guidance",
                icon: Some(Icon::Building),
            },
            CallToAction {
                label: "Medical Guidance",
                href: "/practice-areas/hearing-loss/medical-guidance",
                icon: Some(Icon::Stethoscope),
            },
        ],
        facts: &[
            QuickFact {
                icon: Icon::Clock,
                title: "Time Limit",
                text: "2 years from injury or discovery",
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
        heading: "Don't Wait - Time Limits Apply for California Hearing Loss Claims",
        text: "Evidence can be lost and deadlines are strict. Contact us today for your free consultation.",
        actions: &[
            CallToAction {
                label: "START MY FREE CASE EVALUATION",
                href: EVALUATION,
                icon: None,
            },
            CallToAction {
                label: "CALL (818) 123-4567",
                href: "tel:8181234567",
                icon: Some(Icon::Phone),
            },
        ],
    },
    go_back: false,
};

const EVALUATION: &str = "/practice-areas/hearing-loss/case-evaluation";

const LOSS_TYPES: &[SelectOption] = &[
    SelectOption { value: "sensorineural", label: "Sensorineural Hearing Loss" },
    SelectOption { value: "conductive", label: "Conductive Hearing Loss" },
    SelectOption { value: "mixed", label: "Mixed Hearing Loss" },
    SelectOption { value: "sudden", label: "Sudden Hearing Loss" },
    SelectOption { value: "tinnitus", label: "Tinnitus" },
    SelectOption { value: "unknown", label: "Not Sure/Need Testing" },
];

const CAUSES: &[SelectOption] = &[
    SelectOption { value: "workplace-noise", label: "Workplace Noise Exposure" },
    SelectOption { value: "car-accident", label: "Car Accident" },
    SelectOption { value: "explosion", label: "Explosion/Blast" },
    SelectOption { value: "airbag", label: "Airbag Deployment" },
    SelectOption { value: "industrial-accident", label: "Industrial Accident" },
    SelectOption { value: "chemical-exposure", label: "Chemical Exposure" },
    SelectOption { value: "head-trauma", label: "Head Trauma" },
    SelectOption { value: "other", label: "Other" },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "hearingLossType",
        label: "Type of Hearing Loss",
        kind: FieldKind::Select(LOSS_TYPES),
        placeholder: "Select hearing loss type...",
        required: false,
    },
    FieldSpec {
        name: "causeOfLoss",
        label: "Cause of Hearing Loss",
        kind: FieldKind::Select(CAUSES),
        placeholder: "Select cause...",
        required: false,
    },
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "California Hearing Loss Injury Attorneys",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Hearing loss can be one of the most devastating yet invisible injuries. Unlike a broken bone that heals, damage to your auditory system often results in permanent impairment affecting every aspect of your life. The sudden inability to hear loved ones' voices, participate in conversations, or enjoy music transforms daily existence in profound ways most people cannot imagine until experiencing it themselves."),
            Block::Paragraph("California law recognizes hearing loss as a serious injury deserving substantial compensation, whether caused by workplace noise exposure, car accidents, explosions, or other traumatic events. However, insurance companies routinely minimize these claims, arguing that hearing loss is age-related or pre-existing. They exploit the invisible nature of auditory damage to deny rightful compensation to suffering victims."),
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Learn More About Our California Hearing Loss Practice",
                blocks: &[
                    Block::Card {
                        title: "Medical Understanding",
                        lines: &[
                            "Our team works closely with leading audiologists and ENT specialists throughout California to understand the full scope of your hearing loss, prognosis, and treatment needs.",
                        ],
                    },
                    Block::Card {
                        title: "California Expertise",
                        lines: &[
                            "We have extensive knowledge of California's industrial history, including shipyards, construction sites, and manufacturing facilities where noise exposure occurs.",
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
                        title: "Expedited Process",
                        lines: &[
                            "We understand the urgency and work to secure compensation as quickly as possible.",
                        ],
                    },
                    Block::Card {
                        title: "Compassionate Support",
                        lines: &[
                            "We provide emotional support and guidance throughout your legal journey.",
                        ],
                    },
                    Block::Card {
                        title: "No Win, No Fee",
                        lines: &[
                            "We work on contingency - you pay nothing unless we win your case.",
                        ],
                    },
                    Block::Card {
                        title: "Comprehensive California Hearing Loss Representation",
                        lines: &[
                            "Hearing loss cases in California involve complex medical, legal, and workplace factors. Our firm has the resources and expertise to handle every aspect of your case, from identifying all sources of noise exposure to working with medical experts who can clearly explain how specific incidents caused your hearing damage.",
                            "California has extensive industrial operations where workers face dangerous noise levels. Many of our clients were exposed to hazardous noise at facilities including:",
                            "Construction sites with heavy machinery and power tools",
                            "Manufacturing facilities with loud industrial equipment",
                            "Shipyards and maritime operations",
                            "Airports and aviation maintenance facilities",
                            "Entertainment venues and concert halls",
                            "Military installations and training facilities",
                            "We investigate every potential source of exposure and liability to ensure no responsible party escapes accountability for your hearing loss. This comprehensive approach often results in higher compensation as we identify multiple defendants and pursue claims through various legal channels.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Hearing Loss Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Card {
                title: "Get Your Free Consultation",
                lines: &[
                    "Provide some basic information to help us understand your hearing loss case better.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "diagnosis-steps",
        tab: Some(TabLabel { label: "WHAT TO DO AFTER DIAGNOSIS", icon: Icon::Stethoscope }),
        heading: "What to Do After Your Hearing Loss Diagnosis",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Immediate Medical Steps",
                lines: &[
                    "Get a second opinion from an ENT specialist",
                    "Request all medical records and audiometry reports",
                    "Explore treatment options including hearing aids",
                    "Consider emergency treatment if sudden hearing loss",
                ],
            },
            Block::Card {
                title: "Immediate Legal Steps",
                lines: &[
                    "Contact our firm before speaking to insurance companies",
                    "Document all symptoms and their impact on daily life",
                    "Preserve evidence from the workplace or accident scene",
                    "Don't accept any quick settlement offers",
                ],
            },
            Block::Card {
                title: "Time is Critical",
                lines: &[
                    "California has strict deadlines for filing hearing loss claims. Evidence can be lost, and witnesses' memories fade. The sooner you contact us, the better we can protect your rights and preserve crucial evidence for your case.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "types",
        tab: Some(TabLabel { label: "TYPES OF HEARING LOSS", icon: Icon::VolumeX }),
        heading: "Understanding Different Types of Hearing Loss",
        kind: SectionKind::Prose,
        blocks: &[
        ],
        disclosures: &[
            Disclosure {
                key: "sensorineural",
                label: "Sensorineural Hearing Loss (SNHL)",
                blocks: &[
                    Block::Paragraph("Sensorineural hearing loss represents the most common and often permanent type of hearing damage, occurring when delicate hair cells in the cochlea or the auditory nerve sustain injury. This damage disrupts the conversion of sound vibrations into electrical signals the brain interprets as hearing. Once these microscopic hair cells are destroyed, they cannot regenerate, making SNHL typically irreversible."),
                    Block::Card {
                        title: "Common causes in personal injury cases include:",
                        lines: &[
                            "Acoustic trauma: Sudden exposure to extremely loud sounds like airbag deployment (160-178 dB), explosions, gunshots, or industrial accidents",
                            "Head trauma: Traumatic brain injuries damaging the auditory pathway from inner ear to brain",
                            "Ototoxic exposure: Chemical substances in workplaces that poison the inner ear",
                            "Barotrauma: Pressure changes from explosions or rapid decompression",
                            "Temporal bone fractures: Skull fractures affecting the ear's bony housing",
                            "Symptoms of SNHL include difficulty understanding speech especially in noisy environments, sounds seeming muffled or distorted, tinnitus (ringing/buzzing), inability to hear high-frequency sounds, and challenges localizing sound sources. Treatment options remain limited, primarily involving hearing aids or cochlear implants for severe cases, making compensation for lifetime medical needs crucial.",
                        ],
                    },
                ],
            },
            Disclosure {
                key: "conductive",
                label: "Conductive Hearing Loss",
                blocks: &[
                    Block::Paragraph("Conductive hearing loss occurs when sound waves cannot properly travel through the outer ear, ear canal, eardrum, or middle ear bones (ossicles) to reach the inner ear. Unlike sensorineural damage, conductive hearing loss often responds to medical or surgical treatment, though not always successfully."),
                    Block::Card {
                        title: "Accident-related causes include:",
                        lines: &[
                            "Ruptured eardrum: From explosion pressure waves, direct trauma, or severe pressure changes",
                            "Ossicular chain disruption: Dislocation or fracture of the tiny middle ear bones from impact",
                            "External auditory canal damage: Bleeding, swelling, or foreign objects blocking sound transmission",
                            "Cholesteatoma formation: Abnormal skin growth following trauma",
                        ],
                    },
                ],
            },
            Disclosure {
                key: "mixed",
                label: "Mixed Hearing Loss & Tinnitus",
                blocks: &[
                    Block::Paragraph("Mixed hearing loss combines both conductive and sensorineural components, often resulting from severe trauma affecting multiple ear structures. This type of hearing loss typically produces greater disability than either type alone and requires complex treatment addressing both mechanical and neural aspects."),
                    Block::Paragraph("Tinnitus, the perception of ringing, buzzing, or other phantom sounds, frequently accompanies both types of hearing loss. This condition can be more debilitating than the hearing loss itself, causing sleep disruption, concentration difficulties, anxiety, and depression. Tinnitus severity doesn't always correlate with hearing loss degree, and some victims experience tinnitus without measurable hearing loss."),
                ],
            },
        ],
    },
    Section {
        id: "causes",
        tab: Some(TabLabel { label: "CAUSES & LIABILITY", icon: Icon::AlertTriangle }),
        heading: "Common Causes of Hearing Loss & Legal Liability",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Workplace Noise Exposure",
                lines: &[
                    "Prolonged exposure to noise over 85 decibels causes cumulative cochlear damage. California requires employers to provide hearing protection, conduct audiometric testing, and implement engineering controls.",
                    "Legal Basis: Workers' compensation, third-party equipment manufacturer claims, premises liability",
                ],
            },
            Block::Card {
                title: "Explosion & Blast Injuries",
                lines: &[
                    "Explosions cause complex ear injuries through pressure waves, acoustic trauma, and flying debris. Common in industrial accidents, construction sites, and chemical incidents.",
                    "Legal Basis: Negligence, premises liability, product liability, safety violation claims",
                ],
            },
            Block::Card {
                title: "Motor Vehicle Accidents",
                lines: &[
                    "Airbag deployment produces 160-178 decibels, head trauma from impact, and explosion-like crash sounds can cause immediate or delayed hearing damage.",
                    "Legal Basis: Auto negligence, product liability for defective airbags, uninsured motorist claims",
                ],
            },
            Block::Card {
                title: "Chemical Exposure",
                lines: &[
                    "Ototoxic substances including industrial solvents, heavy metals, and chemicals damage hearing through inner ear poisoning, often combined with noise exposure.",
                    "Legal Basis: Toxic exposure, failure to warn, inadequate safety equipment, environmental contamination",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "treatment",
        tab: Some(TabLabel { label: "TREATMENT OPTIONS", icon: Icon::Headphones }),
        heading: "Medical Treatment Options for Hearing Loss",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Emergency Treatment",
                lines: &[
                    "Sudden hearing loss constitutes a medical emergency. Immediate treatment within 72 hours can sometimes prevent permanent damage. Emergency interventions include high-dose corticosteroids (oral or intratympanic injections), hyperbaric oxygen therapy for severe cases, surgical repair of eardrum perforations, and removal of blood or debris from ear canal.",
                    "Delaying treatment dramatically reduces recovery chances and may weaken legal claims.",
                ],
            },
            Block::Card {
                title: "Hearing Aids & Assistive Devices",
                lines: &[
                    "Modern hearing aids offer sophisticated technology but cannot restore normal hearing. Features include digital signal processing, directional microphones, noise reduction algorithms, bluetooth connectivity, and rechargeable batteries. Professional fitting and programming optimize performance, but adjustment periods frustrate many users.",
                    "Behind-the-ear, in-the-ear, and completely-in-canal styles",
                    "Bilateral hearing loss requires two aids for spatial hearing",
                    "Costs range from $1,000-8,000 per ear with 3-7 year replacement cycles",
                    "Additional devices: FM systems, amplified phones, visual alerts",
                ],
            },
            Block::Card {
                title: "Surgical Interventions",
                lines: &[
                    "Surgery may repair certain conductive hearing losses and provide options for severe sensorineural loss:",
                    "Tympanoplasty: Repairs perforated eardrums",
                    "Ossiculoplasty: Reconstructs damaged middle ear bones",
                    "Cochlear implants: Bypass damaged hair cells for severe SNHL ($30,000-50,000)",
                    "Bone-anchored devices: Transmit sound through skull bone ($10,000-15,000)",
                    "Success varies significantly. Failed surgeries may worsen hearing, requiring careful consideration.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "compensation",
        tab: Some(TabLabel { label: "COMPENSATION", icon: Icon::Shield }),
        heading: "Compensation for Hearing Loss Injuries",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Heading("Economic Damages"),
            Block::Card {
                title: "Medical Expenses",
                lines: &[
                    "Emergency treatment and hospitalization",
                    "Audiological evaluations and ongoing monitoring",
                    "Hearing aids and replacement costs",
                    "Cochlear implants and surgical procedures",
                    "Assistive devices and home modifications",
                ],
            },
            Block::Card {
                title: "Lost Wages & Earning Capacity",
                lines: &[
                    "Time off work for treatment",
                    "Reduced earning capacity in hearing-dependent jobs",
                    "Career limitation and advancement restrictions",
                    "Vocational rehabilitation costs",
                ],
            },
            Block::Heading("Non-Economic Damages"),
            Block::Card {
                title: "Pain & Suffering",
                lines: &[
                    "Physical discomfort from tinnitus",
                    "Emotional distress and mental anguish",
                    "Depression and anxiety from isolation",
                    "Frustration with communication difficulties",
                ],
            },
            Block::Card {
                title: "Loss of Life Enjoyment",
                lines: &[
                    "Inability to enjoy music and nature sounds",
                    "Missing important family conversations",
                    "Social isolation and relationship strain",
                    "Safety concerns from inability to hear warnings",
                ],
            },
            Block::Card {
                title: "No Damage Caps",
                lines: &[
                    "Unlike medical malpractice cases, most hearing loss claims face no damage caps in California. You can recover full economic and non-economic damages without artificial limits. Punitive damages may apply for egregious conduct.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "legal-process",
        tab: Some(TabLabel { label: "LEGAL PROCESS", icon: Icon::Building }),
        heading: "The Legal Process for Hearing Loss Cases",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Initial Consultation & Case Evaluation",
                lines: &[
                    "We review your medical records, discuss the incident causing your hearing loss, and evaluate the strength of your case. This consultation is free and confidential.",
                ],
            },
            Block::Card {
                title: "Medical Documentation & Expert Review",
                lines: &[
                    "We obtain all relevant medical records, arrange additional testing if needed, and have your case reviewed by medical experts who can establish causation and prognosis.",
                ],
            },
            Block::Card {
                title: "Investigation & Evidence Gathering",
                lines: &[
                    "Our team investigates the accident scene, workplace conditions, or product defects that caused your hearing loss. We interview witnesses and preserve crucial evidence.",
                ],
            },
            Block::Card {
                title: "Filing Your Claim",
                lines: &[
                    "We file your lawsuit within California's statute of limitations and handle all legal paperwork and court filings on your behalf.",
                ],
            },
            Block::Card {
                title: "Negotiation & Settlement",
                lines: &[
                    "We negotiate aggressively with insurance companies for fair compensation. Our former defense attorney experience gives us unique insight into their tactics.",
                ],
            },
            Block::Card {
                title: "Trial Preparation & Court Proceedings",
                lines: &[
                    "If settlement negotiations fail, we're prepared to take your case to trial. We present compelling evidence and expert testimony to secure maximum compensation.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "faq",
        tab: Some(TabLabel { label: "FAQ", icon: Icon::MessageCircle }),
        heading: "Frequently Asked Questions",
        kind: SectionKind::Faq(FaqSection { preview: None, view_all: None }),
        blocks: &[
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is sensorineural hearing loss?",
        answer: "Permanent damage to inner ear hair cells or auditory nerve, typically irreversible. Common from noise exposure, head trauma, or ototoxic chemicals. Results in difficulty understanding speech, especially in noisy environments.",
    },
    FaqEntry {
        question: "Can I sue for workplace hearing damage?",
        answer: "Workers' compensation covers most workplace injuries, but third-party claims possible against equipment manufacturers, contractors, or property owners. Intentional employer misconduct may allow civil suits beyond workers' comp.",
    },
    FaqEntry {
        question: "How much compensation can I receive?",
        answer: "Settlements vary widely based on severity, age, occupation, and cause. Minor temporary loss might settle for thousands; permanent bilateral deafness in young workers can exceed millions. Each case requires individual evaluation.",
    },
    FaqEntry {
        question: "What is acoustic trauma?",
        answer: "Hearing damage from sudden, extremely loud sounds like explosions, gunshots, or airbag deployment. Can cause immediate permanent damage to cochlear hair cells, eardrum rupture, and ossicular disruption.",
    },
    FaqEntry {
        question: "Is hearing loss from military service compensable?",
        answer: "Veterans can receive VA disability benefits for service-connected hearing loss. Additionally, 3M earplug litigation allows claims for defective combat earplugs. California veterans may have additional state benefit options.",
    },
    FaqEntry {
        question: "What are cochlear implants?",
        answer: "Surgically implanted devices bypassing damaged hair cells, directly stimulating auditory nerve. For severe-to-profound sensorineural hearing loss when hearing aids insufficient. Costs $30,000-50,000 plus surgery, programming, and rehabilitation.",
    },
    FaqEntry {
        question: "Can children recover damages for hearing loss?",
        answer: "Yes. Childhood hearing loss profoundly impacts development, education, and future opportunities. California extends statute of limitations for minors. Damages include special education, speech therapy, lifetime medical costs, and reduced earning capacity.",
    },
    FaqEntry {
        question: "What is mixed hearing loss?",
        answer: "Combination of conductive and sensorineural hearing loss. Common in severe trauma affecting both mechanical sound transmission and nerve function. Requires complex treatment addressing both components.",
    },
    FaqEntry {
        question: "How do you calculate pain and suffering for hearing loss?",
        answer: "Considering daily impact on communication, relationships, and activities; psychological effects including depression, anxiety, and isolation; safety concerns from inability to hear warnings; and permanence of condition.",
    },
    FaqEntry {
        question: "Can stress or PTSD cause hearing problems?",
        answer: "Yes. Trauma-induced stress can trigger or worsen tinnitus, cause auditory processing difficulties, and result in hyperacusis (sound sensitivity). PTSD from accidents may manifest auditory symptoms.",
    },
    FaqEntry {
        question: "What is barotrauma?",
        answer: "Ear injury from pressure changes. Can occur from explosions, rapid altitude changes, or airbag deployment. Causes eardrum rupture, middle ear hemorrhage, inner ear damage, and potentially permanent hearing loss.",
    },
    FaqEntry {
        question: "Are there California-specific laws protecting hearing loss victims?",
        answer: "Yes. Cal/OSHA provides stronger workplace protections than federal standards. California's pure comparative negligence allows recovery even if partially at fault. No damage caps for most hearing loss cases.",
    },
    FaqEntry {
        question: "Can I sue my employer for workplace hearing loss?",
        answer: "Through workers' compensation primarily, but third-party claims possible against equipment manufacturers, contractors, or property owners. Intentional employer misconduct may allow civil suits beyond workers' comp.",
    },
    FaqEntry {
        question: "What is hyperacusis?",
        answer: "Extreme sensitivity to normal environmental sounds. Can develop after acoustic trauma or head injury. Everyday sounds become painful or overwhelming. Significantly impacts daily activities and social interaction.",
    },
    FaqEntry {
        question: "How long does a hearing loss lawsuit take?",
        answer: "Timeline varies. Simple cases may settle in months; complex litigation can take 1-2 years. Factors include injury severity, liability disputes, insurance company cooperation, and court schedules.",
    },
    FaqEntry {
        question: "Can medications cause hearing loss?",
        answer: "Yes. Ototoxic medications include certain antibiotics, chemotherapy drugs, loop diuretics, and high-dose aspirin. If prescribed negligently or without proper warnings, medical malpractice claims possible.",
    },
    FaqEntry {
        question: "What is the average settlement for hearing loss cases?",
        answer: "Settlements vary widely based on severity, age, occupation, and cause. Minor temporary loss might settle for thousands; permanent bilateral deafness in young workers can exceed millions.",
    },
    FaqEntry {
        question: "Do I need an audiogram before filing a claim?",
        answer: "While helpful, not required to start your claim. We can arrange comprehensive audiological evaluation. Pre-injury hearing tests provide valuable baseline comparisons strengthening your case.",
    },
    FaqEntry {
        question: "Can vertigo or balance problems accompany hearing loss?",
        answer: "Yes. Inner ear houses both hearing (cochlea) and balance (vestibular) organs. Trauma affecting one often impacts the other. Vertigo, dizziness, and balance problems following accidents warrant evaluation.",
    },
    FaqEntry {
        question: "What if my hearing loss appears months after an accident?",
        answer: "Delayed onset doesn't preclude compensation. Progressive hair cell death, delayed endolymphatic hydrops, and gradual recognition of high-frequency loss can manifest months later.",
    },
    FaqEntry {
        question: "Are bone-anchored hearing aids (BAHA) covered in settlements?",
        answer: "Yes. BAHA devices for conductive hearing loss or single-sided deafness require surgical implantation and cost $10,000-15,000 plus surgery. Settlements should include initial placement, processor upgrades, and lifetime maintenance costs.",
    },
    FaqEntry {
        question: "Can hearing loss cause cognitive decline?",
        answer: "Research shows untreated hearing loss accelerates cognitive decline and increases dementia risk. Reduced auditory stimulation affects brain function. Social isolation from communication difficulties compounds cognitive impact.",
    },
    FaqEntry {
        question: "What is recruitment in hearing loss?",
        answer: "Abnormal loudness perception where soft sounds are inaudible but louder sounds become uncomfortably loud quickly. Common with sensorineural hearing loss. Makes hearing aid fitting challenging.",
    },
    FaqEntry {
        question: "Can I recover future medical costs for hearing loss?",
        answer: "Yes. Life care planners calculate decades of future costs including audiological monitoring, hearing aid replacements, potential cochlear implants, assistive devices, and treatment for associated conditions.",
    },
    FaqEntry {
        question: "What if the at-fault party has minimal insurance?",
        answer: "We explore all coverage sources: umbrella policies, employer liability, premises liability, product liability, and your own underinsured motorist coverage. Asset investigation may reveal additional recovery sources.",
    },
    FaqEntry {
        question: "Should I see an ENT specialist or audiologist first?",
        answer: "For sudden hearing loss, see an ENT immediately for potential emergency treatment. For gradual changes or diagnostic evaluation, audiologists provide comprehensive hearing testing.",
    },
    FaqEntry {
        question: "Can hearing loss affect my mental health?",
        answer: "Significantly. Studies show increased rates of depression, anxiety, and social isolation in hearing loss sufferers. Communication frustration, relationship strain, and lost independence impact psychological wellbeing.",
    },
    FaqEntry {
        question: "What happens if I can't afford hearing aids while my case is pending?",
        answer: "We help arrange medical care on lien basis - providers wait for payment from settlement. Some programs offer loaner devices. Document financial hardship from inability to afford necessary devices.",
    },
    FaqEntry {
        question: "How do insurance companies try to minimize hearing loss claims?",
        answer: "They argue pre-existing conditions, claim mild losses don't affect daily life, suggest hearing aids fully restore function, and pressure for quick settlements before understanding injury extent.",
    },
    FaqEntry {
        question: "What evidence do I need for my hearing loss case?",
        answer: "Medical records, audiometric testing, expert testimony linking hearing damage to specific incidents, employment records showing work limitations, and psychological evaluations revealing emotional impact.",
    },
    FaqEntry {
        question: "Can tinnitus be compensated separately from hearing loss?",
        answer: "Yes. Tinnitus (ringing/buzzing sounds) significantly impacts quality of life through sleep disruption, concentration difficulties, and psychological distress. Compensation addresses both hearing loss and tinnitus effects.",
    },
    FaqEntry {
        question: "What is the statute of limitations for hearing loss claims in California?",
        answer: "Generally two years from injury date, but hearing loss often develops gradually. Discovery rule may extend deadlines from when you knew or should have known about the injury and its cause.",
    },
    FaqEntry {
        question: "Are there different types of hearing aids for different losses?",
        answer: "Yes. Behind-the-ear, in-the-ear, and completely-in-canal styles serve different needs. Digital features include directional microphones, noise reduction, bluetooth connectivity. Professional fitting optimizes performance.",
    },
    FaqEntry {
        question: "Can workplace noise exposure cause gradual hearing loss?",
        answer: "Yes. Prolonged exposure to noise over 85 decibels causes cumulative damage. Workers adapt to gradually worsening hearing until significant damage occurs. Employers must provide protection and monitoring.",
    },
    FaqEntry {
        question: "What role do expert witnesses play in hearing loss cases?",
        answer: "Audiologists establish hearing loss extent, ENT specialists determine causation, occupational medicine experts link workplace exposure, economists calculate lifetime losses, and life care planners project future costs.",
    },
    FaqEntry {
        question: "Can hearing loss from car accidents be compensated?",
        answer: "Yes. Airbag deployment (160-178 dB), impact trauma, and explosion-like sounds from crashes can cause immediate or delayed hearing damage requiring comprehensive evaluation and treatment.",
    },
    FaqEntry {
        question: "What is the difference between conductive and sensorineural hearing loss?",
        answer: "Conductive loss involves outer/middle ear problems blocking sound transmission, often treatable medically/surgically. Sensorineural loss affects inner ear/nerve, typically permanent, requiring hearing aids or implants.",
    },
    FaqEntry {
        question: "How do you prove workplace noise caused my hearing loss?",
        answer: "Through noise dosimetry readings, OSHA inspection reports, comparing pre-employment and current audiograms, coworker testimony about noise levels, and expert analysis of workplace hazards.",
    },
    FaqEntry {
        question: "Can explosions cause delayed hearing loss symptoms?",
        answer: "Yes. Initial shock wave damage may not manifest immediately. Progressive hair cell death, delayed endolymphatic hydrops, and gradual recognition of high-frequency loss can appear weeks or months later.",
    },
    FaqEntry {
        question: "What compensation is available for family members affected by my hearing loss?",
        answer: "Loss of consortium claims address relationship impacts. Family members may recover for loss of companionship, communication difficulties, and emotional distress from watching loved ones struggle with hearing impairment.",
    },
    FaqEntry {
        question: "Are there federal regulations protecting workers from noise exposure?",
        answer: "Yes. OSHA requires hearing conservation programs including noise monitoring, audiometric testing, hearing protection, and training. Cal/OSHA provides even stronger protections with lower action levels.",
    },
    FaqEntry {
        question: "What is sudden sensorineural hearing loss (SSNHL)?",
        answer: "Rapid onset hearing loss requiring emergency treatment within 72 hours. Can result from trauma, viral infections, autoimmune disorders, or unknown causes. Early steroid treatment may prevent permanent damage.",
    },
    FaqEntry {
        question: "Can chemical exposure cause hearing loss?",
        answer: "Yes. Ototoxic substances include industrial solvents, heavy metals, carbon monoxide, and certain pesticides. Combined exposure to chemicals and noise exponentially increases damage risk.",
    },
    FaqEntry {
        question: "How do you calculate lost earning capacity for hearing loss?",
        answer: "Vocational experts assess how hearing loss limits career options. Economic experts project lifetime earning losses considering education, skills, pre-injury trajectory, and accommodation possibilities.",
    },
    FaqEntry {
        question: "What assistive devices beyond hearing aids might I need?",
        answer: "FM systems for meetings, amplified phones, vibrating alarms, visual alert systems, closed captioning services, and home safety modifications. Costs add up over lifetime requiring comprehensive planning.",
    },
    FaqEntry {
        question: "Can hearing loss cases go to trial?",
        answer: "Yes. While many settle, complex cases involving disputed liability, severe damages, or bad faith insurance practices may require jury trial. We prepare every case thoroughly for potential trial.",
    },
    FaqEntry {
        question: "What is presbycusis and how does it affect my case?",
        answer: "Age-related hearing loss that insurance companies claim caused your symptoms. Expert analysis can differentiate trauma-induced loss from normal aging, especially when sudden changes occur after incidents.",
    },
    FaqEntry {
        question: "Are there support groups for people with hearing loss?",
        answer: "Yes. Organizations like HLAA (Hearing Loss Association of America) provide support, education, and advocacy. Participation demonstrates ongoing impact and may provide helpful testimony for your case.",
    },
    FaqEntry {
        question: "Can hearing loss affect my ability to drive safely?",
        answer: "Yes. Inability to hear sirens, horns, or approaching vehicles creates safety risks. Some states require additional mirrors or restrictions. These limitations affect independence and may warrant additional compensation.",
    },
    FaqEntry {
        question: "What is auditory processing disorder (APD)?",
        answer: "Difficulty processing heard information despite normal hearing thresholds. Can result from head trauma affecting brain's auditory centers. Requires specialized testing and treatment, separate from peripheral hearing loss.",
    },
];
