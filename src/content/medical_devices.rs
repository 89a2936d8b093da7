use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "medical-devices",
    name: "Medical Devices",
    seo: Seo {
        title: "Medical Device Injury Lawyer California | Defective Medical Device Attorney | Trembach Law Firm",
        description: "Former defense attorney fighting for California medical device injury victims. Hip implants, hernia mesh, pacemakers. FDA 510(k) failures. Free consultation. No fees unless we win.",
        canonical: "https://www.trembachlawfirm.com/practice-areas/medical-devices",
        structured_data: true,
    },
    hero: Hero {
        title: "California Medical Device Injury Attorneys",
        tagline: "Holding Manufacturers Accountable for Defective Devices",
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
        ],
        facts: &[
            QuickFact {
                icon: Icon::Clock,
                title: "Time Limit",
                text: "2 years from discovery in California",
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
            QuickFact {
                icon: Icon::Phone,
                title: "Immediate Contact",
                text: "Injured today? Call now for immediate assistance",
            },
        ],
    },
    closing: Closing {
        heading: "Injured by a Defective Medical Device?",
        text: "Manufacturers have teams of lawyers protecting their profits. You deserve the same level of protection. Contact us today for your free consultation.",
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

const EVALUATION: &str = "/medical-devices-case-evaluation";

const DEVICE_TYPES: &[SelectOption] = &[
    SelectOption { value: "hip-implant", label: "Hip Implant" },
    SelectOption { value: "knee-implant", label: "Knee Implant" },
    SelectOption { value: "hernia-mesh", label: "Hernia Mesh" },
    SelectOption { value: "transvaginal-mesh", label: "Transvaginal Mesh" },
    SelectOption { value: "ivc-filter", label: "IVC Filter" },
    SelectOption { value: "pacemaker", label: "Pacemaker/Defibrillator" },
    SelectOption { value: "breast-implant", label: "Breast Implant" },
    SelectOption { value: "spinal-implant", label: "Spinal Implant" },
    SelectOption { value: "insulin-pump", label: "Insulin Pump" },
    SelectOption { value: "cpap-machine", label: "CPAP Machine" },
    SelectOption { value: "other", label: "Other Device" },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "injuryDate",
        label: "Date of Injury",
        kind: FieldKind::Date,
        placeholder: "",
        required: false,
    },
    FieldSpec {
        name: "deviceType",
        label: "Type of Device",
        kind: FieldKind::Select(DEVICE_TYPES),
        placeholder: "Select device type...",
        required: false,
    },
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "Understanding Medical Device Injuries in California",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Medical devices are supposed to improve lives and save patients from suffering. When these devices fail, the consequences can be devastating - requiring additional surgeries, causing permanent disabilities, or even death. California law provides strong protections for victims of defective medical devices, allowing recovery under multiple legal theories including strict product liability, negligence, and breach of warranty."),
            Block::Paragraph("The medical device industry generates over $200 billion annually in the United States, with California representing the largest market. Yet despite FDA oversight, thousands of dangerous devices reach patients each year. In 2024 alone, the FDA issued recalls affecting over 100 million devices. Behind each recall are real people suffering real injuries that could have been prevented if manufacturers had prioritized safety over profits."),
            Block::Card {
                title: "Critical: The FDA's Flawed 510(k) Process",
                lines: &[
                    "Most medical devices reach the market through the FDA's 510(k) process, which doesn't require clinical testing. Manufacturers only need to show their device is \"substantially equivalent\" to an existing device - even if that device was later recalled for causing injuries. This dangerous loophole has allowed countless defective devices to harm patients. Studies show devices approved through 510(k) are 11.5 times more likely to be recalled than those requiring full testing. Our attorneys understand this broken system and use it to strengthen your case against manufacturers who prioritized profits over patient safety.",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Learn More About Medical Device Injuries",
                blocks: &[
                    Block::Card {
                        title: "The Scope of Medical Device Injuries",
                        lines: &[
                            "Medical device injuries affect patients across all demographics and medical specialties. From cardiac devices keeping hearts beating to orthopedic implants enabling mobility, when these devices fail, they rob patients of the very benefits they were promised. Studies indicate that approximately 1 in 10 medical devices will experience some form of failure during their expected lifetime, yet manufacturers often conceal these failure rates from patients and doctors.",
                            "California hospitals perform over 500,000 device implantation procedures annually. Each represents a patient trusting that rigorous testing and quality control ensure their safety. Unfortunately, the reality is far different. The medical device industry operates with less oversight than the pharmaceutical industry, despite devices often posing greater risks. Unlike drugs that can be discontinued, a defective implanted device may require dangerous revision surgery to remove or replace.",
                        ],
                    },
                    Block::Card {
                        title: "Your Rights Under California Law",
                        lines: &[
                            "California's product liability laws are among the strongest in the nation for protecting medical device injury victims. Under strict liability doctrine, you don't need to prove the manufacturer was negligent - only that the device was defective and caused your injuries. This levels the playing field against billion-dollar corporations with armies of lawyers.",
                            "The state's consumer protection laws also provide additional remedies. California's Unfair Competition Law and False Advertising Law allow recovery when manufacturers make misleading claims about device safety or effectiveness. These laws can support claims for both economic and non-economic damages, ensuring comprehensive compensation for all losses suffered.",
                            "Time limits apply to medical device claims in California. Generally, you have two years from discovering your injury to file a lawsuit. However, the discovery rule can extend this deadline if you couldn't reasonably have known the device caused your problems. Some cases involve latent injuries that don't manifest for years after implantation. Our attorneys carefully analyze each case to ensure claims are filed within all applicable deadlines.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Medical Device Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Card {
                title: "Get Your Free Consultation",
                lines: &[
                    "Provide information about your medical device injury to help us understand your case better.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "device-steps",
        tab: Some(TabLabel { label: "WHAT TO DO AFTER DEVICE INJURY", icon: Icon::AlertTriangle }),
        heading: "What to Do After a Medical Device Injury",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Immediate Medical Steps",
                lines: &[
                    "Seek immediate medical attention for symptoms",
                    "Get second opinion from device specialist",
                    "Document all symptoms and treatments",
                    "Keep all medical records and device documentation",
                ],
            },
            Block::Card {
                title: "Preserve Evidence",
                lines: &[
                    "Keep the device if removed from body",
                    "Take photos of injuries and complications",
                    "Save all packaging and documentation",
                    "Report to FDA's MedWatch system",
                ],
            },
            Block::Card {
                title: "Document Everything",
                lines: &[
                    "Record device model and serial numbers",
                    "Keep implantation and revision surgery records",
                    "Document pain levels and limitations",
                    "Track medical expenses and lost wages",
                ],
            },
            Block::Card {
                title: "Legal Protection",
                lines: &[
                    "Contact experienced medical device attorney",
                    "Understand your rights and time limits",
                    "Don't sign documents from manufacturers",
                    "Protect evidence and preserve claims",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "device-types",
        tab: Some(TabLabel { label: "DEVICE TYPES", icon: Icon::Activity }),
        heading: "Medical Devices We Handle",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Our attorneys have extensive experience with all types of defective medical device cases throughout California:"),
            Block::Card {
                title: "Hip Replacement Failures",
                lines: &[
                    "Metal-on-metal hip implants have caused catastrophic failures requiring revision surgery and causing permanent damage. These devices shed metal particles into surrounding tissue and bloodstream, causing metallosis - a condition where metal debris destroys bone and soft tissue. Symptoms include severe pain, implant loosening, difficulty walking, and systemic toxicity from elevated metal levels.",
                    "California sees over 50,000 hip replacement surgeries annually. When these devices fail prematurely - often within 5 years instead of the promised 15-20 years - patients face revision surgery more complex and risky than the original procedure. Recovery takes longer, complications increase, and some patients never regain their mobility.",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "device-types",
                label: "Learn More About Specific Device Types",
                blocks: &[
                    Block::Card {
                        title: "Knee Replacement Complications",
                        lines: &[
                            "Defective knee implants cause debilitating pain, instability, and loss of range of motion. Components can loosen, break, or cause allergic reactions to materials. Some designs have inherent flaws causing premature wear or improper joint mechanics. Revision surgery for failed knee replacements is particularly challenging, often requiring bone grafts and leaving patients with permanent limitations.",
                        ],
                    },
                    Block::Card {
                        title: "Hernia Mesh Injuries",
                        lines: &[
                            "Surgical mesh used to repair hernias has caused devastating complications including chronic pain, infection, organ perforation, and mesh migration. The polypropylene material can shrink, harden, and erode into surrounding organs. Many patients require multiple revision surgeries to remove mesh that has become embedded in tissue. Despite FDA warnings and thousands of adverse event reports, manufacturers continue marketing these dangerous products.",
                        ],
                    },
                    Block::Card {
                        title: "Transvaginal Mesh Disasters",
                        lines: &[
                            "Transvaginal mesh for pelvic organ prolapse and stress urinary incontinence has destroyed countless women's lives. The mesh can erode through vaginal tissue causing severe pain, bleeding, infection, and painful intercourse. Many women experience permanent nerve damage and require multiple surgeries attempting removal - though complete removal is often impossible as mesh becomes incorporated into tissue.",
                        ],
                    },
                    Block::Card {
                        title: "IVC Filter Complications",
                        lines: &[
                            "Inferior vena cava filters designed to prevent blood clots from reaching the lungs have caused serious injuries when they fracture, migrate, or perforate blood vessels. Broken filter pieces can travel to the heart or lungs causing life-threatening emergencies. Many filters become impossible to remove after tissue grows around them.",
                        ],
                    },
                    Block::Card {
                        title: "Cardiac Device Defects",
                        lines: &[
                            "Pacemakers, defibrillators, and heart valves save lives when working properly but cause devastating injuries when defective. Battery failures, lead fractures, and premature device failures leave patients vulnerable to sudden cardiac death. Mechanical heart valves can fail catastrophically, while tissue valves may deteriorate prematurely requiring risky replacement surgery.",
                        ],
                    },
                    Block::Card {
                        title: "Breast Implant Complications",
                        lines: &[
                            "Breast implants can cause numerous complications including rupture, capsular contracture, and breast implant-associated anaplastic large cell lymphoma (BIA-ALCL). Textured implants particularly increase cancer risk. Silicone implants that rupture can cause systemic symptoms including fatigue, cognitive issues, and joint pain - a condition many call breast implant illness.",
                        ],
                    },
                    Block::Card {
                        title: "Spinal Implant Failures",
                        lines: &[
                            "Spinal cord stimulators, artificial discs, and fusion hardware can cause severe complications when they fail. Stimulators may deliver incorrect electrical pulses causing pain rather than relief. Artificial discs can wear prematurely or migrate, compressing nerves. Fusion hardware including rods, screws, and cages can break or loosen, failing to achieve fusion and requiring additional surgery.",
                        ],
                    },
                    Block::Card {
                        title: "Insulin Pump Malfunctions",
                        lines: &[
                            "Defective insulin pumps can deliver too much or too little insulin, causing dangerous blood sugar fluctuations. Software glitches, hardware failures, and cybersecurity vulnerabilities put diabetic patients at risk of hypoglycemia, hyperglycemia, diabetic ketoacidosis, and death. Patients rely on these devices for life-sustaining medication, making failures particularly dangerous.",
                        ],
                    },
                    Block::Card {
                        title: "CPAP Recall Injuries",
                        lines: &[
                            "Philips recalled millions of CPAP and BiPAP machines containing sound abatement foam that degrades into toxic particles users inhale. This carcinogenic foam causes respiratory problems, cancer, kidney disease, and other serious conditions. Despite knowing about the foam degradation issue, Philips continued selling these devices for years.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "fda-process",
        tab: Some(TabLabel { label: "FDA PROCESS", icon: Icon::Shield }),
        heading: "Understanding the FDA's Broken System",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Understanding how the FDA regulates medical devices is crucial to building a strong case against manufacturers. The system has significant flaws that allow dangerous devices to reach patients."),
            Block::Card {
                title: "The 510(k) Loophole",
                lines: &[
                    "Over 95% of medical devices enter the market through the 510(k) \"premarket notification\" process. This pathway requires only that manufacturers show their device is \"substantially equivalent\" to a device already on the market - called a \"predicate device.\" No clinical testing is required, and manufacturers can use any predicate device, even ones later recalled for safety issues.",
                    "This creates a dangerous chain reaction: Device A gets approved based on unsafe Device B, then Device C gets approved based on Device A, and so on. Each device moves further away from any actual safety testing, yet all are considered \"FDA cleared\" - a misleading term that suggests rigorous review when none occurred.",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "fda-process",
                label: "Learn More About FDA Regulatory Failures",
                blocks: &[
                    Block::Card {
                        title: "Class II Device Problems",
                        lines: &[
                            "Most problematic devices are classified as Class II \"moderate risk\" devices subject to 510(k) review. This includes hip implants, hernia mesh, IVC filters, and many other devices causing serious injuries. Despite being labeled \"moderate risk,\" these devices often pose significant dangers when they fail.",
                        ],
                    },
                    Block::Card {
                        title: "Post-Market Surveillance Failures",
                        lines: &[
                            "The FDA relies heavily on voluntary adverse event reporting, which captures only a fraction of actual problems. Studies suggest only 1-10% of device problems are reported to the FDA. Manufacturers have little incentive to report problems that could trigger recalls and lawsuits.",
                        ],
                    },
                    Block::Card {
                        title: "Recall Ineffectiveness",
                        lines: &[
                            "When the FDA finally issues recalls, they're often too late and too weak. Most recalls are voluntary, and manufacturers can continue selling devices while developing corrective actions. Class I recalls for life-threatening defects often take years to implement fully.",
                        ],
                    },
                    Block::Card {
                        title: "Industry Influence",
                        lines: &[
                            "The medical device industry pays user fees that fund FDA device reviews, creating potential conflicts of interest. The FDA's approval timeline pressures and industry lobbying can compromise safety oversight. Former FDA officials often join device companies, raising questions about regulatory capture.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "legal-process",
        tab: Some(TabLabel { label: "LEGAL PROCESS", icon: Icon::Settings }),
        heading: "The Legal Process for Medical Device Cases",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Medical device litigation is complex, involving product liability law, FDA regulations, medical evidence, and corporate accountability. Understanding the process helps you make informed decisions about your case."),
            Block::Card {
                title: "Initial Case Evaluation",
                lines: &[
                    "We begin with a comprehensive evaluation of your medical records, device history, and injuries. This includes identifying the specific device model, manufacturer, and any recalls or adverse event reports. We review your medical treatment and consult with experts to establish the connection between the device and your injuries.",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "legal-process",
                label: "Learn More About Legal Procedures",
                blocks: &[
                    Block::Card {
                        title: "Investigation and Discovery",
                        lines: &[
                            "Our investigation includes obtaining internal company documents, FDA correspondence, clinical trial data, and safety reports. We work with engineers to analyze device failures and medical experts to establish causation. Discovery may reveal that manufacturers knew about problems but concealed them from patients and doctors.",
                        ],
                    },
                    Block::Card {
                        title: "Expert Witnesses",
                        lines: &[
                            "Medical device cases require expert testimony from engineers, doctors, and regulatory specialists. Engineers explain how devices failed and why. Medical experts establish causation and quantify injuries. Regulatory experts testify about FDA requirements and manufacturer violations.",
                        ],
                    },
                    Block::Card {
                        title: "Multidistrict Litigation (MDL)",
                        lines: &[
                            "Many device cases are consolidated in federal MDLs for coordinated pretrial proceedings. This provides efficiency and shared resources while preserving individual trials. We evaluate whether MDL participation or state court filing better serves your interests.",
                        ],
                    },
                    Block::Card {
                        title: "Settlement vs. Trial",
                        lines: &[
                            "Most cases settle before trial, but we prepare every case for trial to maximize settlement value. Settlement provides guaranteed compensation and faster resolution. Trial offers potential for higher damages but involves uncertainty. We recommend the best strategy based on your case strength and personal needs.",
                        ],
                    },
                ],
            },
        ],
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
    Section {
        id: "resources",
        tab: Some(TabLabel { label: "RESOURCES", icon: Icon::Building }),
        heading: "Medical Device Resources",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Compensation Calculator",
                lines: &[
                    "Get an estimate of your potential medical device injury compensation.",
                ],
            },
            Block::Card {
                title: "Medical Guidance",
                lines: &[
                    "Understanding medical care and documentation for device injuries.",
                ],
            },
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I know if my medical device is defective?",
        answer: "Signs of device problems include: unexpected pain or complications, device malfunction or failure, complications requiring revision surgery, symptoms that began after device implantation, or learning your device was recalled. Many patients assume complications are normal when they're actually caused by defective devices.",
    },
    FaqEntry {
        question: "What's the time limit to file a medical device lawsuit in California?",
        answer: "California generally allows 2 years from discovery of injury to file product liability claims. However, this can be complex for medical devices because injuries may not be immediately apparent. The discovery rule may extend deadlines if you couldn't reasonably have known the device caused your problems. Don't delay - evidence disappears and witnesses forget.",
    },
    FaqEntry {
        question: "Can I sue if my doctor recommended the device?",
        answer: "Yes. Your doctor's recommendation doesn't protect the manufacturer from liability for defective devices. While you may have claims against your doctor for malpractice, the manufacturer remains responsible for designing and manufacturing safe devices. Many doctors rely on manufacturer representations that may be false or misleading.",
    },
    FaqEntry {
        question: "What compensation is available for medical device injuries?",
        answer: "Compensation may include: past and future medical expenses, revision surgery costs, lost wages and earning capacity, pain and suffering, emotional distress, loss of enjoyment of life, and punitive damages for egregious conduct. California allows full compensation for all losses caused by defective devices.",
    },
    FaqEntry {
        question: "Do I need the actual device to file a lawsuit?",
        answer: "While having the device strengthens your case, it's not always required. Medical records often contain device identification information including model and serial numbers. If the device was removed, ask your surgeon to preserve it. If discarded, we can often identify the device through medical records and imaging studies.",
    },
    FaqEntry {
        question: "How much does it cost to hire a medical device attorney?",
        answer: "We work on contingency fee basis - you pay nothing unless we win your case. We advance all case expenses including expert witness fees, court costs, and investigation expenses. You're not responsible for any fees unless we secure compensation for you. This allows everyone access to quality legal representation regardless of financial resources.",
    },
    FaqEntry {
        question: "What if my device was FDA approved?",
        answer: "FDA approval doesn't prevent lawsuits against manufacturers. The FDA approval process has significant limitations, and approval doesn't guarantee safety. Many recalled devices were FDA approved. California law allows you to sue manufacturers for defective devices regardless of FDA approval status.",
    },
    FaqEntry {
        question: "Can I file a claim if I signed informed consent?",
        answer: "Informed consent forms typically cover known risks of surgery, not defects in the device itself. Manufacturers have a duty to make devices safe regardless of what consent forms you signed. Consent forms don't waive your right to sue for defective products that cause unexpected injuries.",
    },
    FaqEntry {
        question: "How long do medical device lawsuits take?",
        answer: "Case duration varies based on complexity, number of defendants, and whether cases are in MDL or state court. Simple cases may resolve in 1-2 years, while complex cases can take 3-5 years or more. We work efficiently to resolve cases as quickly as possible while maximizing compensation.",
    },
    FaqEntry {
        question: "What evidence should I preserve?",
        answer: "Important evidence includes: the device itself if removed, all medical records, device packaging and documentation, photographs of injuries, witness contact information, and any correspondence with manufacturers. Also preserve evidence of damages like medical bills, lost wage documentation, and impact on daily life.",
    },
    FaqEntry {
        question: "Can family members file claims for my device injury?",
        answer: "Spouses can file loss of consortium claims for impact on marriage relationship. If device injuries result in death, family members can file wrongful death claims. Family members may also have their own exposure claims in some situations, such as secondhand exposure to toxic device materials.",
    },
    FaqEntry {
        question: "What if multiple devices were implanted?",
        answer: "Multiple devices may create multiple claims against different manufacturers. Each device requires separate evaluation for defects and causation. We pursue all viable claims to maximize total compensation. Bilateral implants (both hips/knees) often involve the same manufacturer and similar injuries.",
    },
    FaqEntry {
        question: "How do you prove the device caused my injuries?",
        answer: "We use multiple forms of evidence: medical records showing temporal relationship between implantation and symptoms, imaging studies documenting device failure, pathology reports if tissue was tested, expert testimony linking device to injuries, and scientific literature establishing causation. Pattern of similar injuries in other patients provides additional support.",
    },
    FaqEntry {
        question: "What if I had pre-existing conditions?",
        answer: "Pre-existing conditions don't prevent recovery if the device worsened your condition or caused new injuries. California's 'eggshell plaintiff' rule means manufacturers take victims as they find them. If devices aggravate pre-existing conditions, manufacturers remain liable for all resulting damages.",
    },
    FaqEntry {
        question: "Can I get a second medical opinion about my device?",
        answer: "Absolutely. Second opinions often reveal device problems original doctors missed or misattributed. We can recommend independent doctors without financial ties to device manufacturers. Second opinions strengthen your case by confirming device-related injuries.",
    },
    FaqEntry {
        question: "What's an MDL and how does it affect my case?",
        answer: "Multidistrict litigation (MDL) consolidates similar federal cases before one judge for coordinated pretrial proceedings. This provides efficiency and consistency while preserving individual trials. MDL participation can provide resources and shared discovery but may delay resolution.",
    },
    FaqEntry {
        question: "What if the device was implanted in an emergency?",
        answer: "Emergency situations don't excuse defective devices. While informed consent may be limited in emergencies, manufacturers remain liable for defective products regardless of implantation circumstances. The device should be safe whether implanted electively or emergently.",
    },
    FaqEntry {
        question: "Can Medicare/Medicaid patients file device lawsuits?",
        answer: "Yes. Medicare/Medicaid coverage doesn't affect your right to pursue manufacturers for defective devices. These programs may assert liens for reimbursement from settlements, but we negotiate to minimize liens and maximize your net recovery.",
    },
    FaqEntry {
        question: "What about devices implanted years ago?",
        answer: "Older implants may still qualify for compensation if problems recently developed or you just discovered the device caused injuries. California's discovery rule extends deadlines when injuries weren't immediately apparent. Some devices cause latent injuries appearing years later.",
    },
    FaqEntry {
        question: "How do I find out my device's model and serial numbers?",
        answer: "Medical records from implantation surgery should contain device information including manufacturer, model, lot, and serial numbers. Operative reports, device cards given to patients, and billing records also contain identifiers. We help obtain all necessary device identification.",
    },
    FaqEntry {
        question: "What if I used the device off-label?",
        answer: "Off-label use (FDA-cleared for different purpose) doesn't bar recovery if the device was defective. Doctors legally prescribe devices off-label, and manufacturers often promote off-label use. If device defects caused injuries regardless of specific use, manufacturers remain liable.",
    },
    FaqEntry {
        question: "Can I switch lawyers if I'm unhappy with representation?",
        answer: "Yes, you can change attorneys anytime. Your case file belongs to you. New and previous attorneys work out fee arrangements without additional cost to you. If you're dissatisfied with current representation, we can evaluate your case.",
    },
    FaqEntry {
        question: "What's the difference between settlement and verdict?",
        answer: "Settlements are negotiated agreements avoiding trial uncertainty and providing guaranteed compensation. Verdicts result from trial where judge or jury determines liability and damages. Settlements offer faster resolution and privacy. Trials risk losing but may yield higher awards.",
    },
    FaqEntry {
        question: "Do I have to go to court?",
        answer: "Most cases settle without trial. If trial becomes necessary, your testimony would typically be required, though we prepare you thoroughly. Depositions (sworn testimony outside court) may be needed during discovery. We handle all legal proceedings while minimizing disruption to your life.",
    },
    FaqEntry {
        question: "What if the hospital won't give me my medical records?",
        answer: "You have legal right to your medical records. We can obtain them through proper authorization or subpoena if necessary. Some facilities charge copying fees we advance for you. Records are crucial evidence, and we ensure complete documentation is obtained.",
    },
    FaqEntry {
        question: "How are expert witnesses used in device cases?",
        answer: "Expert witnesses provide crucial testimony about device defects, medical causation, and damages. Engineers analyze device failures. Medical experts explain how defects caused injuries. Regulatory experts discuss FDA requirements. We work with nationally recognized experts.",
    },
    FaqEntry {
        question: "What if I signed an arbitration agreement?",
        answer: "Hospital arbitration agreements typically don't apply to claims against device manufacturers. Even if arbitration applies to medical malpractice claims, product liability claims against manufacturers usually proceed in court.",
    },
    FaqEntry {
        question: "Can I recover if the company changed ownership?",
        answer: "Successor companies often assume liability for predecessor's products. Mergers and acquisitions don't eliminate victim compensation rights. We identify all potentially liable entities to ensure compensation sources remain available despite corporate restructuring.",
    },
    FaqEntry {
        question: "What about psychological injuries from device failures?",
        answer: "Psychological injuries including anxiety, depression, PTSD, and adjustment disorders are compensable damages. Device failures causing disfigurement, loss of function, or chronic pain often trigger psychological conditions requiring treatment.",
    },
    FaqEntry {
        question: "How do recalls affect ongoing lawsuits?",
        answer: "Recalls strengthen cases by confirming device problems but don't automatically result in compensation. Manufacturers often fight liability despite recalls. Recall notices provide valuable evidence of defects and manufacturer knowledge.",
    },
    FaqEntry {
        question: "What if I had good results but now need revision?",
        answer: "Delayed failures often indicate design defects. Devices should function throughout expected lifespan. Premature revision need, regardless of initial success, suggests defects warranting compensation for revision surgery and ongoing problems.",
    },
    FaqEntry {
        question: "Can I file a claim if still using the device?",
        answer: "Yes. Many patients cannot safely remove devices or removal poses greater risks than leaving them. Ongoing use doesn't waive compensation rights. You may recover for increased monitoring, anxiety about future failure, and anticipated revision surgery costs.",
    },
    FaqEntry {
        question: "What about experimental or investigational devices?",
        answer: "Experimental devices may have different liability rules, but manufacturers still have duties to conduct proper testing and warn of known risks. Participation in clinical trials doesn't waive all rights. We evaluate whether proper protocols were followed.",
    },
    FaqEntry {
        question: "How do you handle cases involving multiple manufacturers?",
        answer: "Complex devices may involve multiple manufacturers for different components. We identify all potentially liable parties including device manufacturers, component suppliers, and companies involved in design or testing. This maximizes potential recovery sources.",
    },
    FaqEntry {
        question: "What if my doctor had financial relationships with the manufacturer?",
        answer: "Doctor-manufacturer financial relationships may be relevant to your case. These relationships can influence device selection and may indicate bias in diagnosis or treatment. We investigate these relationships as part of building your case.",
    },
    FaqEntry {
        question: "Can international patients file claims in California?",
        answer: "International patients who received devices in California or from California-based manufacturers may have viable claims. Jurisdiction and choice of law issues can be complex. We evaluate whether California courts can hear your case.",
    },
    FaqEntry {
        question: "What about class action lawsuits vs. individual cases?",
        answer: "Medical device injuries usually involve individual lawsuits or mass torts rather than class actions due to varying damages between patients. Individual cases allow personalized attention and compensation based on specific injuries.",
    },
    FaqEntry {
        question: "How do you calculate damages in device cases?",
        answer: "Damages include economic losses (medical expenses, lost wages, future care needs) and non-economic losses (pain and suffering, emotional distress, loss of enjoyment). We work with economists and life care planners to calculate comprehensive damages.",
    },
    FaqEntry {
        question: "What if I can't afford ongoing medical treatment?",
        answer: "We can help connect you with treatment options and specialists. Some medical providers work with patients on payment plans pending lawsuit resolution. We also pursue expedited proceedings when urgent medical care is needed.",
    },
    FaqEntry {
        question: "Are there special rules for cardiac device cases?",
        answer: "Cardiac devices involve life-threatening failures requiring specialized medical and legal expertise. We work with cardiologists and cardiac surgeons who understand these complex devices. Emergency situations may affect evidence preservation requirements.",
    },
    FaqEntry {
        question: "What about robotic surgery device injuries?",
        answer: "Robotic surgery injuries may involve device malfunctions, design defects, or inadequate training. These cases require analysis of both the device and the surgical procedure. Multiple parties may be liable including robot manufacturers and training companies.",
    },
    FaqEntry {
        question: "How do you handle cases where the device appears to work correctly?",
        answer: "Some device defects aren't immediately apparent even when devices seem functional. For example, metal-on-metal hips may work initially while causing hidden tissue damage. We investigate whether devices meet their promised performance standards.",
    },
    FaqEntry {
        question: "What's the difference between recalls and safety communications?",
        answer: "Recalls require corrective action, while safety communications just provide information. Both can be valuable evidence. Many dangerous devices receive safety communications before recalls. We monitor all FDA safety information relevant to your device.",
    },
    FaqEntry {
        question: "Can I file a claim for a device that was never recalled?",
        answer: "Absolutely. Many defective devices are never recalled despite causing injuries. Recalls depend on FDA action, which can be slow or inadequate. Manufacturer liability exists regardless of recall status if devices are proven defective.",
    },
    FaqEntry {
        question: "What happens if I die during the legal process?",
        answer: "If you pass away during litigation, your family can continue the case as a wrongful death claim. California law allows spouses, children, and dependent family members to recover for loss of financial support, companionship, and other damages.",
    },
    FaqEntry {
        question: "How do you determine which companies are responsible?",
        answer: "We conduct thorough investigations using corporate records, device labeling, FDA databases, and expert analysis to identify all potentially liable parties. This includes device manufacturers, component suppliers, distributors, and related companies.",
    },
    FaqEntry {
        question: "What medical experts do you work with?",
        answer: "Our network includes board-certified specialists in relevant medical fields who understand device-related injuries. These experts help establish causation, explain complications, project future medical needs, and provide compelling testimony about device defects.",
    },
    FaqEntry {
        question: "Can I still file a claim if I don't remember device details?",
        answer: "Memory gaps are common, especially for devices implanted years ago. We use investigative techniques including medical record analysis, device registries, and manufacturer databases to identify specific devices and build comprehensive cases.",
    },
    FaqEntry {
        question: "What information should I gather before contacting an attorney?",
        answer: "Helpful information includes: all medical records related to the device, device identification information, photos of injuries, witness contact information, insurance documentation, and any correspondence with manufacturers. Don't worry if information is incomplete - we help gather additional documentation.",
    },
    FaqEntry {
        question: "Can spouses file their own claims for emotional distress?",
        answer: "California allows spouses to file loss of consortium claims for the impact of device injuries on their relationship, including loss of companionship, affection, and intimacy. Spouses may also have their own claims if exposed to toxic device materials.",
    },
];
