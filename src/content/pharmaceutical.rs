use crate::controller::{FieldKind, FieldSpec, SelectOption, SubmitPolicy};
use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, LeadForm, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "pharmaceutical",
    name: "Pharmaceutical Injury",
    seo: Seo {
        title: "California Pharmaceutical Injury Lawyer | Dangerous Drug Attorney | Trembach Law Firm",
        description: "Former defense attorney fighting pharmaceutical companies. Ozempic, dangerous drugs, FDA recalls. Free 24/7 consultation. No fees unless we win. $0 upfront costs.",
        canonical: "https://www.trembachlawfirm.com/practice-areas/pharmaceutical",
        structured_data: true,
    },
    hero: Hero {
        title: "California Pharmaceutical Injury Lawyers",
        tagline: "Fighting Big Pharma for Dangerous Drug Victims",
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
                label: "Call (818) 123-4567",
                href: "tel:8181234567",
                icon: Some(Icon::Phone),
            },
            CallToAction {
                label: "Compensation Calculator",
                href: "/pharmaceutical-compensation-calculator",
                icon: Some(Icon::Calculator),
            },
            CallToAction {
                label: "Medical Guidance",
                href: "/pharmaceutical-medical-guidance",
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
                text: "We advance all case costs",
            },
            QuickFact {
                icon: Icon::Award,
                title: "Free Consultation",
                text: "No cost to discuss your case",
            },
        ],
    },
    closing: Closing {
        heading: "Harmed by a Dangerous Drug?",
        text: "Pharmaceutical companies count on victims waiting too long. Contact us today for your free consultation.",
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
            CallToAction {
                label: "EMAIL US",
                href: "mailto:info@trembachlawfirm.com",
                icon: Some(Icon::Mail),
            },
        ],
    },
    go_back: false,
};

const EVALUATION: &str = "/pharmaceutical-case-evaluation";

const DRUGS: &[SelectOption] = &[
    SelectOption { value: "ozempic", label: "Ozempic (semaglutide)" },
    SelectOption { value: "wegovy", label: "Wegovy (semaglutide)" },
    SelectOption { value: "mounjaro", label: "Mounjaro (tirzepatide)" },
    SelectOption { value: "trulicity", label: "Trulicity (dulaglutide)" },
    SelectOption { value: "rybelsus", label: "Rybelsus (semaglutide)" },
    SelectOption { value: "saxenda", label: "Saxenda (liraglutide)" },
    SelectOption { value: "other-prescription", label: "Other Prescription Drug" },
    SelectOption { value: "over-counter", label: "Over-the-Counter Medication" },
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "firstName",
        label: "First Name",
        kind: FieldKind::Text,
        placeholder: "First name",
        required: true,
    },
    FieldSpec {
        name: "lastName",
        label: "Last Name",
        kind: FieldKind::Text,
        placeholder: "Last name",
        required: true,
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        kind: FieldKind::Tel,
        placeholder: "(555) 123-4567",
        required: true,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        placeholder: "you@example.com",
        required: true,
    },
    FieldSpec {
        name: "drugInvolved",
        label: "Medication Involved",
        kind: FieldKind::Select(DRUGS),
        placeholder: "Select medication...",
        required: false,
    },
    FieldSpec {
        name: "injuryDescription",
        label: "Describe Your Injury",
        kind: FieldKind::TextArea,
        placeholder: "Briefly describe the side effects or injuries you experienced...",
        required: false,
    },
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "California Pharmaceutical Injury Attorneys",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("When medications meant to heal cause harm, you deserve justice. Pharmaceutical companies generate over $1.5 trillion annually, giving them virtually unlimited resources to fight lawsuits. They employ teams of lawyers, hired experts, and public relations firms to minimize liability and protect profits. Without experienced legal representation, victims face an uphill battle against these corporate giants."),
            Block::Paragraph("At Trembach Law Firm, our former defense experience reveals exactly how pharmaceutical companies hide risks, manipulate data, and deceive regulators. We're prepared to fight for maximum compensation while you focus on treatment and recovery."),
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Show More About Our California Pharmaceutical Practice",
                blocks: &[
                    Block::Card {
                        title: "Dangerous Drug Expertise",
                        lines: &[
                            "Our team specializes in pharmaceutical litigation involving FDA recalls, black box warnings, and hidden side effects that pharmaceutical companies failed to disclose.",
                        ],
                    },
                    Block::Card {
                        title: "Former Defense Experience",
                        lines: &[
                            "Attorney Trembach's background defending pharmaceutical companies provides unique insights into corporate defense strategies and how to overcome them.",
                        ],
                    },
                    Block::Heading("Why Choose Trembach Law Firm for Pharmaceutical Cases?"),
                    Block::Card {
                        title: "Active MDL Participation",
                        lines: &[
                            "We actively participate in major pharmaceutical MDLs including current GLP-1 drug litigation.",
                        ],
                    },
                    Block::Card {
                        title: "Time-Critical Action",
                        lines: &[
                            "We act quickly to preserve evidence and meet crucial deadlines before they expire.",
                        ],
                    },
                    Block::Card {
                        title: "Medical Expert Network",
                        lines: &[
                            "Access to leading pharmacologists, epidemiologists, and medical specialists for expert testimony.",
                        ],
                    },
                    Block::Card {
                        title: "No Win, No Fee",
                        lines: &[
                            "We advance all costs and work on contingency - you pay nothing unless we win your case.",
                        ],
                    },
                    Block::Card {
                        title: "Critical Information About Pharmaceutical Injuries",
                        lines: &[
                            "Time is critical in pharmaceutical injury cases. California's two-year statute of limitations begins when you discover or should have discovered your injury. However, drug injuries often develop slowly, making it essential to act quickly once symptoms appear.",
                            "FDA approval doesn't guarantee safety. Many dangerous drugs received FDA approval based on limited clinical trials that lasted only months, while serious side effects often emerge after years of use. Pharmaceutical companies frequently hide negative trial results, manipulate data, and use ghostwritten studies to deceive regulators and doctors.",
                            "Black box warnings—the FDA's strongest safety warning—often come too late. By the time these warnings are added, thousands of patients have already suffered irreversible harm. Currently, over 400 medications carry black box warnings, yet many doctors and patients remain unaware of these critical safety alerts.",
                            "Your medical records are crucial evidence. Document every symptom, doctor visit, hospitalization, and medication change. Keep all pharmacy receipts, medication packaging, and correspondence with healthcare providers. This documentation becomes vital when proving causation—the link between the drug and your injury.",
                            "Compensation in pharmaceutical cases can be substantial. Successful claims may recover medical expenses (past and future), lost wages, reduced earning capacity, pain and suffering, emotional distress, loss of consortium, and in cases of egregious corporate misconduct, punitive damages designed to punish and deter future wrongdoing.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "evaluation",
        tab: Some(TabLabel { label: "CASE EVALUATION", icon: Icon::Scale }),
        heading: "Free Pharmaceutical Case Evaluation",
        kind: SectionKind::Evaluation,
        blocks: &[
            Block::Card {
                title: "Get Your Free Consultation",
                lines: &[
                    "Provide information about your pharmaceutical injury to help us understand your case better.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "after-injury",
        tab: Some(TabLabel { label: "AFTER INJURY STEPS", icon: Icon::Stethoscope }),
        heading: "What to Do After a Pharmaceutical Injury",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Immediate Medical Steps",
                lines: &[
                    "Continue medical treatment under supervision",
                    "Never stop medication without doctor consultation",
                    "Document all symptoms and medical visits",
                    "Report to FDA MedWatch program",
                ],
            },
            Block::Card {
                title: "Immediate Legal Steps",
                lines: &[
                    "Contact pharmaceutical injury attorney immediately",
                    "Preserve all medication bottles and packaging",
                    "Avoid speaking to insurance companies",
                    "Keep all medical bills and pharmacy records",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "after-injury",
                label: "Show More Detailed Steps",
                blocks: &[
                    Block::Card {
                        title: "1. Continue Medical Treatment Under Supervision",
                        lines: &[
                            "Never stop taking prescribed medication without consulting your doctor. Abrupt discontinuation can cause serious withdrawal symptoms, rebound effects, or worsen your underlying condition. Work with your healthcare provider to safely adjust or discontinue medication if necessary. Document all medical visits, treatments, and conversations about your symptoms.",
                        ],
                    },
                    Block::Card {
                        title: "2. Preserve All Evidence",
                        lines: &[
                            "Keep all medication bottles, packaging, receipts, and pharmacy records. Take photographs of the medication, lot numbers, and expiration dates. Save all medical bills, insurance statements, and correspondence with healthcare providers. Create a symptom diary documenting when side effects began, their severity, and how they impact your daily life.",
                        ],
                    },
                    Block::Card {
                        title: "3. Report to FDA MedWatch",
                        lines: &[
                            "File an adverse event report with the FDA's MedWatch program. This creates an official record of your injury and helps identify dangerous drug patterns. While voluntary, these reports strengthen individual cases and contribute to public safety by alerting regulators to emerging drug risks.",
                        ],
                    },
                    Block::Card {
                        title: "4. Document Your Damages",
                        lines: &[
                            "Track all economic losses including medical expenses, lost wages, and out-of-pocket costs. Document non-economic damages like pain levels, emotional distress, and lifestyle limitations. Keep records of missed work, cancelled activities, and relationship impacts. Photograph visible injuries or physical changes.",
                        ],
                    },
                    Block::Card {
                        title: "5. Avoid Insurance Company Tactics",
                        lines: &[
                            "Pharmaceutical companies and their insurers may contact you directly. They often offer quick, lowball settlements or request recorded statements to minimize liability. Decline all communication and refer them to your attorney. Never sign releases or accept settlements without legal review.",
                        ],
                    },
                    Block::Card {
                        title: "6. Understand Your Timeline",
                        lines: &[
                            "California's statute of limitations for pharmaceutical injuries is generally two years from discovery of the injury. However, the discovery rule may extend this deadline if injuries weren't immediately apparent. Some federal claims have different deadlines. Acting quickly preserves evidence and strengthens your case.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "dangerous-drugs",
        tab: Some(TabLabel { label: "DANGEROUS DRUGS", icon: Icon::AlertTriangle }),
        heading: "Current Dangerous Drugs & Active Litigation",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("We're actively investigating and litigating cases involving these medications"),
            Block::Card {
                title: "Ozempic/Wegovy (Semaglutide)",
                lines: &[
                    "Manufacturer: Novo Nordisk",
                    "Serious Side Effects:",
                    "Gastroparesis (stomach paralysis)",
                    "Intestinal obstruction/ileus",
                    "NAION (vision loss)",
                    "Pancreatitis",
                    "Gallbladder disease",
                    "Kidney damage",
                    "MDL Status: Active (MDL 3094)",
                ],
            },
            Block::Card {
                title: "Mounjaro (Tirzepatide)",
                lines: &[
                    "Manufacturer: Eli Lilly",
                    "Serious Side Effects:",
                    "Severe gastrointestinal issues",
                    "Thyroid tumors",
                    "Vision problems",
                    "Severe dehydration",
                    "Kidney problems",
                    "Status: Under investigation",
                ],
            },
            Block::Card {
                title: "Trulicity (Dulaglutide)",
                lines: &[
                    "Manufacturer: Eli Lilly",
                    "Serious Side Effects:",
                    "Stomach paralysis",
                    "Persistent vomiting",
                    "Severe abdominal pain",
                    "Pancreatic cancer risk",
                    "MDL Status: Consolidated with GLP-1 litigation",
                ],
            },
            Block::Card {
                title: "Elmiron (Pentosan)",
                lines: &[
                    "Manufacturer: Janssen Pharmaceuticals",
                    "Serious Side Effects:",
                    "Pigmentary maculopathy",
                    "Vision loss/blindness",
                    "Retinal damage",
                    "Night blindness",
                    "Status: Active litigation",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "legal-process",
        tab: Some(TabLabel { label: "LEGAL PROCESS", icon: Icon::Shield }),
        heading: "The Pharmaceutical Litigation Process",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Understanding each step from initial consultation to resolution"),
        ],
        disclosures: &[
            Disclosure {
                key: "legal-process",
                label: "Show Detailed Legal Process",
                blocks: &[
                    Block::Card {
                        title: "Phase 1: Case Evaluation (Days 1-7)",
                        lines: &[
                            "We begin with a comprehensive free consultation reviewing your medical history, medication usage, injuries, and damages. Our pharmaceutical injury team analyzes medical records, pharmacy data, and FDA databases to establish causation. We identify all potentially liable parties and assess your case value based on similar verdicts and settlements. This initial evaluation determines litigation strategy and whether individual lawsuit or MDL participation best serves your interests.",
                        ],
                    },
                    Block::Card {
                        title: "Phase 2: Investigation & Evidence Collection (Weeks 1-8)",
                        lines: &[
                            "Our investigators gather critical evidence including complete medical records, pharmacy dispensing records, and insurance claims. We obtain FDA adverse event reports, clinical trial data, and internal company documents through discovery. Expert witnesses including physicians, pharmacologists, and epidemiologists review your case to establish causation. We document all damages through medical evaluations, economic analysis, and life care planning for future needs.",
                        ],
                    },
                    Block::Card {
                        title: "Phase 3: Filing Your Claim (Weeks 8-12)",
                        lines: &[
                            "We prepare and file your lawsuit in the appropriate jurisdiction—California state court, federal court, or transfer to existing MDL. The complaint details factual allegations, legal theories (strict liability, negligence, failure to warn), and damage claims. Defendants typically include drug manufacturers, distributors, and potentially healthcare providers. Filing triggers the litigation timeline and preserves your rights before statute of limitations expires.",
                        ],
                    },
                    Block::Card {
                        title: "Phase 4: Discovery Process (Months 3-12)",
                        lines: &[
                            "Discovery involves exchanging information with defendants through document requests, interrogatories, and depositions. We request internal company communications, clinical trial data, FDA correspondence, and marketing materials. Pharmaceutical companies often claim privilege over damaging documents, requiring court intervention. Expert depositions establish causation while company representative depositions reveal corporate knowledge and decision-making processes.",
                        ],
                    },
                    Block::Card {
                        title: "Phase 5: Settlement Negotiations or Trial (Months 12-24)",
                        lines: &[
                            "Most pharmaceutical cases settle before trial through individual negotiations or global MDL settlements. We evaluate settlement offers against trial prospects, considering case strengths, weaknesses, and client needs. If settlement isn't acceptable, we prepare for trial with expert witness preparation, jury selection, and trial strategy. California state courts often provide more favorable venues than federal courts for pharmaceutical litigation.",
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
        heading: "Pharmaceutical Injury Resources",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Compensation Calculator",
                lines: &[
                    "Estimate your potential pharmaceutical injury compensation based on your specific circumstances.",
                ],
            },
            Block::Card {
                title: "Medical Guidance",
                lines: &[
                    "Essential medical information and guidance for pharmaceutical injury victims.",
                ],
            },
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What types of pharmaceutical injuries do you handle?",
        answer: "We handle all types of pharmaceutical injuries including dangerous drug side effects, inadequate warnings, clinical trial deception, and FDA approval fraud. Common cases involve GLP-1 drugs (Ozempic, Wegovy, Mounjaro), causing gastroparesis, vision loss, and organ damage. We also handle antidepressant birth defects, blood thinner bleeding, diabetes drug complications, and cancer medications causing secondary cancers. Any prescription or over-the-counter medication causing unexpected serious harm may support a claim. Our pharmaceutical injury expertise covers defective design, manufacturing defects, and failure to warn claims against drug manufacturers.",
    },
    FaqEntry {
        question: "How long do I have to file a pharmaceutical injury lawsuit in California?",
        answer: "California's statute of limitations for pharmaceutical injury cases is generally two years from discovery of the injury. The discovery rule means the clock starts when you knew or should have known your injury was drug-related, not necessarily when you first took the medication. However, some federal claims have different deadlines, and certain circumstances can extend or shorten this timeframe. Given the complexity of pharmaceutical cases and evidence preservation needs, it's crucial to consult with an attorney immediately upon suspecting drug-related injuries. Acting quickly preserves your rights and strengthens your case through better evidence collection.",
    },
    FaqEntry {
        question: "What compensation can I recover in a pharmaceutical injury case?",
        answer: "Pharmaceutical injury compensation can include: medical expenses (past and future), lost wages and reduced earning capacity, pain and suffering, emotional distress, loss of consortium, and in cases of corporate misconduct, punitive damages. Current Ozempic gastroparesis cases project $400,000-$700,000 for severe permanent injuries, while temporary symptoms may yield $50,000-$200,000. Factors affecting value include injury severity, permanence, age, income, treatment needs, and strength of causation evidence. Unlike medical malpractice, no damage caps limit pharmaceutical recoveries. Wrongful death cases can recover funeral expenses, lost support, and loss of companionship. Each case is unique, requiring individualized evaluation.",
    },
    FaqEntry {
        question: "How do you prove a drug caused my injury?",
        answer: "Proving causation requires both general and specific causation evidence. General causation shows the drug can cause your type of injury through epidemiological studies, clinical trials, adverse event reports, and biological plausibility. Specific causation proves the drug caused YOUR injury through temporal relationship (timing), differential diagnosis (ruling out other causes), dose-response relationship, and dechallenge/rechallenge data. Medical experts provide crucial testimony connecting the drug to your injuries. We work with leading experts in pharmacology, epidemiology, and relevant medical specialties to build compelling causation evidence.",
    },
    FaqEntry {
        question: "What if I have pre-existing conditions?",
        answer: "Pre-existing conditions don't prevent recovery if the drug worsened your condition or caused new injuries. California's \"eggshell plaintiff\" rule means defendants take victims as they find them—increased vulnerability doesn't reduce liability. We must show the drug was a substantial factor in causing harm, not the sole cause. Medical experts differentiate drug-induced injuries from pre-existing conditions through careful analysis. Documentation showing condition stability before drug use and deterioration afterward strengthens causation. Many successful pharmaceutical cases involve patients with underlying health conditions.",
    },
    FaqEntry {
        question: "Can I sue if the drug has a black box warning?",
        answer: "Yes, black box warnings don't provide complete immunity from lawsuits. You can still sue if: the warning was added after you took the drug, the warning inadequately described the risk, your doctor wasn't properly informed, or off-label use wasn't addressed. Additionally, if the company knew about risks before adding warnings, punitive damages may apply. Black box warnings often come too late, after thousands suffer injuries. The adequacy of warnings—not just their existence—determines liability. We examine warning timeline, content, and distribution to establish liability despite warnings.",
    },
    FaqEntry {
        question: "What if I took a generic version of the drug?",
        answer: "Generic drug cases face additional challenges due to federal preemption limiting failure-to-warn claims. However, you may still have claims for: design defects if the generic deviated from brand specifications, manufacturing defects causing contamination or incorrect dosing, or claims against the brand manufacturer who created the dangerous design. Some states allow \"innovator liability\" holding brand manufacturers responsible for generic injuries. We explore all legal theories to overcome generic drug obstacles and may pursue claims against prescribing physicians or pharmacies when appropriate.",
    },
    FaqEntry {
        question: "How much does it cost to hire your firm?",
        answer: "We work exclusively on contingency fee basis—you pay nothing unless we win. We advance all case costs including expert witnesses, medical record acquisition, FDA document requests, and court fees. These costs are reimbursed from your settlement or verdict. If we don't win, you owe nothing for attorney fees or advanced costs. This arrangement ensures access to experienced pharmaceutical litigation regardless of your financial situation. The contingency fee percentage is competitive and discussed during your free consultation. Most pharmaceutical cases require substantial upfront investment that we provide.",
    },
    FaqEntry {
        question: "Do I need to report my injury to the FDA?",
        answer: "While not legally required, reporting to FDA's MedWatch program is strongly recommended. Reports create official records helpful to your case, contribute to drug safety monitoring potentially helping others, and may trigger FDA action strengthening all cases. Reports don't replace lawsuits but complement legal action. We can assist with FDA reporting while pursuing your legal claim. Healthcare providers can also file reports. Multiple reports about similar injuries strengthen causation arguments and may lead to label changes or recalls benefiting all plaintiffs.",
    },
    FaqEntry {
        question: "Should I join a class action or file individual lawsuit?",
        answer: "Individual lawsuits typically provide better outcomes than class actions for pharmaceutical injuries. Class actions result in identical settlements regardless of injury severity, while individual cases receive customized compensation. Multidistrict Litigation (MDL) offers middle ground—coordinated discovery and shared costs while maintaining individual case values. The best approach depends on injury severity, case strength, and current litigation landscape. We evaluate these factors to recommend optimal strategy. Severe injuries often warrant individual litigation while minor injuries may benefit from group resolution.",
    },
    FaqEntry {
        question: "How long does a pharmaceutical injury case take?",
        answer: "Pharmaceutical cases typically take 2-4 years from filing to resolution, though timeline varies significantly. Factors affecting duration include: case complexity, discovery scope, expert witness preparation, MDL coordination, settlement negotiations, and trial schedules. Simple cases with clear causation may resolve within 18 months, while complex cases requiring extensive discovery can take 5+ years. Early settlements are possible when liability is clear and damages substantial. MDL participation may extend timelines but often results in better outcomes through coordinated strategy and shared resources.",
    },
    FaqEntry {
        question: "What's the difference between MDL and class action?",
        answer: "Multidistrict Litigation (MDL) consolidates similar cases for efficient pretrial proceedings while preserving individual claims. Unlike class actions where everyone receives identical treatment, MDL cases maintain unique valuations based on specific injuries. MDL provides cost savings through shared discovery, coordinated expert witnesses, and unified strategy against pharmaceutical companies. Class actions bind all members to single settlement, often inadequate for severe injuries. MDL allows individual settlement negotiations or trial if needed. Current pharmaceutical MDLs include GLP-1 drugs, offering strength in numbers while protecting individual rights.",
    },
    FaqEntry {
        question: "Can I sue my doctor for prescribing a dangerous drug?",
        answer: "Possibly, if the doctor deviated from standard care. Medical malpractice claims may arise from: prescribing contraindicated drugs, ignoring black box warnings, failing to monitor for side effects, prescribing excessive doses, or not considering safer alternatives. However, doctors often rely on pharmaceutical company information. The \"learned intermediary\" doctrine sometimes shields manufacturers behind physician prescribing decisions. We evaluate potential medical malpractice claims alongside pharmaceutical liability. California's MICRA caps may limit medical malpractice recovery, making pharmaceutical claims more valuable.",
    },
    FaqEntry {
        question: "What if I threw away the medication?",
        answer: "Don't worry—pharmacy records, medical records, and insurance claims can prove medication use. Physical pills aren't required for successful cases. However, if you still have medication, preserve it in original packaging and photograph lot numbers. Pharmacy records show exact products dispensed including manufacturer and lot numbers. Insurance claims verify prescription filling dates and quantities. Medical records document prescribing history. We obtain all necessary documentation proving your medication use without physical evidence.",
    },
    FaqEntry {
        question: "What if the doctor prescribed the drug off-label?",
        answer: "Off-label prescribing (using drugs for non-FDA-approved purposes) is legal and common but can strengthen your case. Pharmaceutical companies often illegally promote off-label use without adequate safety testing. If the company encouraged off-label prescribing through sales representatives or marketing materials, liability increases. Warnings may not address off-label risks, strengthening failure-to-warn claims. The doctor may share liability for inappropriate off-label prescribing. We investigate marketing practices and physician communications to establish liability for off-label injuries.",
    },
    FaqEntry {
        question: "How do mass tort settlements work?",
        answer: "Mass tort settlements typically create compensation grids based on injury severity. Point systems assign values for factors like: injury type and severity, duration of drug use, age, and medical treatment required. Individual cases receive point scores determining settlement tiers. Unlike class actions, each plaintiff can accept or reject their offer. Global settlements streamline compensation but may undervalue unique cases. We evaluate whether participating in global settlements or pursuing individual resolution maximizes your recovery. Settlement administration can take months after agreement.",
    },
    FaqEntry {
        question: "Can I still sue if I'm partially at fault?",
        answer: "California's pure comparative negligence law allows recovery even if you're partially at fault, though damages reduce proportionally. For example, if you're 30% at fault for not following dosing instructions, you can still recover 70% of damages. However, pharmaceutical companies bear strict liability for defective drugs regardless of user behavior. Taking more than prescribed doesn't excuse failure to warn about side effects. We counter blame-shifting tactics and minimize any comparative fault to maximize your recovery.",
    },
    FaqEntry {
        question: "What if my loved one died from a dangerous drug?",
        answer: "California's wrongful death statute allows spouses, children, and dependents to recover for pharmaceutical-caused deaths. Recoverable damages include: funeral and burial expenses, lost financial support and benefits, loss of companionship and consortium, and household services value. Survival actions recover damages the deceased could have claimed including medical expenses before death and pain and suffering. Two-year statute of limitations typically applies from date of death. We handle these sensitive cases with compassion while aggressively pursuing accountability and maximum compensation for grieving families.",
    },
    FaqEntry {
        question: "Should I stop taking the medication?",
        answer: "Never stop taking prescribed medication without medical supervision. Abrupt discontinuation can cause serious withdrawal symptoms, rebound effects, or dangerous health complications. Consult your doctor about concerns and alternative treatments. Document conversations about stopping or switching medications. Your legal case doesn't require continuing dangerous medication. In fact, mitigation of damages may require stopping once risks are known. We coordinate with healthcare providers ensuring safe medical management while preserving legal claims.",
    },
    FaqEntry {
        question: "Can I afford the medical experts needed for my case?",
        answer: "We advance all expert witness costs, which can exceed $50,000 in complex pharmaceutical cases. Experts typically include: treating physicians, medical specialists, pharmacologists, epidemiologists, FDA regulatory experts, and economic damages experts. These costs are reimbursed from your settlement or verdict. If we don't win, you owe nothing for these expenses. Our resources and experience ensure access to top experts regardless of your financial situation. MDL participation can reduce individual expert costs through shared expenses.",
    },
    FaqEntry {
        question: "What if I can't afford ongoing medical treatment?",
        answer: "We connect you with doctors who provide treatment on a lien basis, meaning payment comes from your settlement. This ensures quality medical care without upfront costs. We can also negotiate with existing providers for payment deferrals. Proper treatment documentation strengthens your case while addressing health needs. Some clients qualify for clinical trials or pharmaceutical company patient assistance programs. We explore all options ensuring you receive necessary care during litigation.",
    },
    FaqEntry {
        question: "What are bellwether trials?",
        answer: "Bellwether trials are representative cases selected from MDL to be tried first. These \"test cases\" help both sides evaluate strengths, weaknesses, and jury reactions. Outcomes guide settlement negotiations for remaining cases. Selection involves both random and hand-picked cases representing various injury types. Bellwether verdicts aren't binding but create settlement pressure. Winning bellwethers increase all case values while losses may reduce expectations. The process typically takes 18-24 months from MDL formation to first trial.",
    },
    FaqEntry {
        question: "How do I know if I have a strong case?",
        answer: "Strong pharmaceutical cases typically have: clear temporal relationship between drug use and injury onset, documented medical treatment for drug-related symptoms, medical expert support for causation, and significant damages justifying litigation costs. Factors strengthening cases include FDA safety communications about your drug, clinical studies showing similar injuries, multiple plaintiff cases, and good documentation of drug use and injuries. We evaluate case strength during free consultation, considering medical records, injury severity, and available evidence. Even seemingly weak cases may have hidden strengths requiring professional evaluation.",
    },
    FaqEntry {
        question: "What if I can't travel for legal proceedings?",
        answer: "We accommodate clients who cannot travel due to health, distance, or financial constraints. Most case work occurs remotely through phone, email, and video conferencing. Document signing can happen electronically or through mobile notaries. Depositions may occur near your location or via video. MDL participation doesn't require traveling to Pennsylvania. Only rare cases require court appearances, and we can often appear on your behalf. Medical examinations may be arranged locally. We come to you when necessary, ensuring accessibility regardless of limitations.",
    },
    FaqEntry {
        question: "Can I change lawyers if I'm unhappy?",
        answer: "Yes, you can change attorneys anytime. Your case file belongs to you. New and previous attorneys work out fee division without additional cost to you. Common reasons for switching include poor communication, lack of progress, or disagreement about strategy. Changing lawyers doesn't restart statute of limitations but may delay proceedings. Ensure new counsel has pharmaceutical litigation experience. We often accept cases from other firms, improving outcomes through specialized expertise and resources. Request your complete file before switching. New representation can reinvigorate stalled cases.",
    },
    FaqEntry {
        question: "What if the drug helped me despite side effects?",
        answer: "Therapeutic benefit doesn't excuse undisclosed risks or eliminate liability. You deserved informed consent about all risks to make educated decisions. Many patients would choose different treatments knowing true risks. The issue isn't whether drugs work but whether companies honestly disclosed dangers. Safer alternatives might have provided similar benefits without severe side effects. Pharmaceutical companies must warn about all material risks regardless of drug efficacy. Your appreciation for therapeutic benefits doesn't waive rights to compensation for injuries. Cases focus on failure to warn, not complete drug failure.",
    },
    FaqEntry {
        question: "How do courts handle scientific evidence in pharmaceutical cases?",
        answer: "Courts apply Daubert standards requiring scientific evidence be relevant and reliable. Expert testimony must use accepted methodologies and peer-reviewed studies. Epidemiological evidence showing statistical associations between drugs and injuries carries significant weight. Animal studies, case reports, and adverse event data provide supporting evidence. Judges act as gatekeepers excluding \"junk science\" while allowing legitimate scientific debate. Both sides present competing experts requiring judges to evaluate credibility. MDL judges often hold \"science days\" educating themselves on complex medical issues. California state courts apply similar standards ensuring only valid science reaches juries.",
    },
    FaqEntry {
        question: "What's the difference between side effects and adverse events?",
        answer: "Side effects are known, expected reactions listed in drug information (nausea, drowsiness, etc.). Adverse events are unexpected, serious reactions not adequately warned about. Legal liability typically involves adverse events—serious injuries the manufacturer knew or should have known about but failed to disclose. Severity matters: minor side effects don't support lawsuits while life-altering adverse events do. The distinction affects whether risks were acceptable with informed consent. Manufacturers must warn about both common minor side effects and rare serious adverse events.",
    },
    FaqEntry {
        question: "Can I sue for increased disease risk without current symptoms?",
        answer: "Generally, California requires present injury for lawsuit viability. However, medical monitoring claims may be available for increased disease risk requiring surveillance. Some courts recognize \"subclinical injury\"—cellular damage without symptoms. Fear of future disease alone typically doesn't support claims without physical changes. Regular medical monitoring costs may be recoverable. If monitoring detects disease later, new claims may arise. Document all monitoring and testing related to increased risk. Some mass settlements include medical monitoring programs for at-risk patients without current symptoms.",
    },
    FaqEntry {
        question: "What if I participated in a clinical trial?",
        answer: "Clinical trial participation complicates but doesn't eliminate claims. Informed consent documents may limit liability but don't provide complete immunity. Trials must disclose known risks—undisclosed dangers remain actionable. Investigators and institutions may share liability for protocol violations or inadequate monitoring. Post-approval injuries differ from trial phase injuries legally. Trial data revealing hidden risks strengthens broader litigation. Document retention from trials provides valuable evidence. Payment received for participation doesn't waive injury claims. Special ethical duties apply to human research subjects potentially increasing liability.",
    },
    FaqEntry {
        question: "How do product liability laws differ from medical malpractice?",
        answer: "Product liability holds manufacturers strictly liable for defective products regardless of negligence. Medical malpractice requires proving healthcare providers breached standard of care. Pharmaceutical cases don't require proving company negligence—only that drugs were defective and caused injury. No damage caps apply to pharmaceutical cases unlike California's MICRA limiting medical malpractice non-economic damages to $250,000. Statute of limitations differs—two years for product liability versus one year for medical malpractice. Expert requirements vary—product cases need causation experts while malpractice requires standard of care testimony. Recovery potential typically exceeds malpractice due to no caps and punitive damage availability.",
    },
    FaqEntry {
        question: "What if I'm elderly or have limited life expectancy?",
        answer: "Age doesn't prevent recovery though it may affect damage calculations. Elderly plaintiffs can recover for pain, suffering, medical expenses, and reduced quality of remaining life. Limited life expectancy may reduce future economic damages but not past damages or pain and suffering. Courts recognize elderly victims deserve full justice regardless of age. Expedited trial settings may be available for plaintiffs with limited life expectancy. Estate planning ensures recovery benefits intended beneficiaries if death occurs during litigation. We pursue aggressive timelines maximizing recovery during your lifetime.",
    },
    FaqEntry {
        question: "Should I join the current MDL or file individual lawsuit?",
        answer: "The best approach depends on your specific circumstances. MDL participation provides cost savings through shared discovery and expert witnesses, coordinated strategy against pharmaceutical companies, and potential inclusion in global settlements. Individual lawsuits offer more control over case timing, choice of jurisdiction (possibly keeping your case in California), and customized litigation strategy. Factors to consider include injury severity, available evidence, financial needs timeline, and risk tolerance. We evaluate these factors to recommend the optimal approach for maximizing your recovery.",
    },
];
