use crate::icon::Icon;

use super::{
    Block, CallToAction, Closing, Disclosure, FaqEntry, FaqSection, Hero, PracticeArea,
    QuickFact, Section, SectionKind, Seo, Sidebar, TabLabel,
};

pub(super) static PAGE: PracticeArea = PracticeArea {
    slug: "workplace-injuries",
    name: "Workplace Injuries",
    seo: Seo {
        title: "California Workplace Injury Lawyers | Third-Party Claims Beyond Workers' Comp",
        description: "Injured at work? Beyond workers' comp - pursue third-party claims for full compensation. Expert workplace injury attorneys fight for maximum recovery. Free consultation.",
        canonical: "/practice-areas/workplace-injuries",
        structured_data: false,
    },
    hero: Hero {
        title: "Injured at Work? Go Beyond Workers' Comp",
        tagline: "Third-Party Claims for Full Compensation",
        cta: CallToAction {
            label: "START MY FREE CASE EVALUATION",
            href: EVALUATION,
            icon: None,
        },
    },
    sections: SECTIONS,
    faqs: FAQS,
    lead_form: None,
    sidebar: Sidebar {
        blurb: "Workers' comp is only the beginning. Contact us today to schedule your FREE consultation.",
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
                text: "2 years for third-party lawsuits",
            },
            QuickFact {
                icon: Icon::DollarSign,
                title: "Full Compensation",
                text: "Pain and suffering plus 100% of lost wages",
            },
            QuickFact {
                icon: Icon::Shield,
                title: "No Win, No Fee",
                text: "We only get paid if you win",
            },
        ],
    },
    closing: Closing {
        heading: "Don't Settle for Workers' Comp Alone",
        text: "Third-party claims recover what workers' compensation never will. Contact us today for your free consultation.",
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

const EVALUATION: &str = "/workplace-injuries-case-evaluation";

pub(super) const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        tab: Some(TabLabel { label: "OVERVIEW", icon: Icon::FileText }),
        heading: "California Workplace Injury Attorneys",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("When workplace injuries occur due to third-party negligence, we fight for full compensation beyond workers' compensation limits. Our former defense experience reveals insurance company tactics, maximizing your recovery while you focus on healing."),
            Block::Paragraph("Workplace injuries can be life-altering events. At Trembach Law Firm, we understand the urgency of workplace injury cases and the devastating impact they have on victims and families. With our background in defense work, we know exactly how employers, contractors, and their insurance companies minimize claims."),
        ],
        disclosures: &[
            Disclosure {
                key: "overview",
                label: "Learn More About Our California Workplace Injury Practice",
                blocks: &[
                    Block::Card {
                        title: "Former Defense Experience",
                        lines: &[
                            "Our defense background reveals exactly how employers, contractors, and insurance companies build defenses against workplace injury claims and minimize payouts.",
                        ],
                    },
                    Block::Card {
                        title: "OSHA & Safety Law Expertise",
                        lines: &[
                            "We have extensive knowledge of California OSHA regulations, safety standards, and workplace compliance requirements that create third-party liability.",
                        ],
                    },
                    Block::Card {
                        title: "Understanding Third-Party Liability in Workplace Injuries",
                        lines: &[
                            "While California's workers' compensation system prevents direct lawsuits against employers under Labor Code § 3600's \"exclusive remedy\" rule, this protection has critical exceptions. When someone other than your employer causes your workplace injury, you can pursue both workers' compensation AND a third-party personal injury lawsuit, dramatically increasing your potential recovery.",
                            "Every year, over 363,000 California workers suffer injuries on the job, with construction accounting for 75 fatal accidents in 2022 alone. While workers' compensation provides basic benefits, it leaves injured workers dramatically undercompensated.",
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
        kind: SectionKind::Elsewhere(EVALUATION),
        blocks: &[],
        disclosures: &[],
    },
    Section {
        id: "what-to-do",
        tab: Some(TabLabel { label: "IMMEDIATE STEPS", icon: Icon::AlertTriangle }),
        heading: "What To Do After a Workplace Injury",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Taking the right steps immediately after a workplace injury can protect your health and legal rights. Here's what you need to do:"),
            Block::Card {
                title: "1. Seek Medical Care",
                lines: &[
                    "Get immediate treatment. Unlike workers' comp, third-party claims let you choose your own doctors. Document all medical care.",
                ],
            },
            Block::Card {
                title: "2. Document Everything",
                lines: &[
                    "Photograph injuries, accident scene, equipment. Gather witness information. Keep all medical records and incident reports.",
                ],
            },
            Block::Card {
                title: "3. Contact Our Firm",
                lines: &[
                    "We identify third-party liability beyond your employer to pursue full compensation while protecting your workers' comp rights.",
                ],
            },
            Block::Card {
                title: "4. Receive Full Recovery",
                lines: &[
                    "Get 100% wages, pain & suffering, and future losses - not just limited workers' comp benefits.",
                ],
            },
        ],
        disclosures: &[
            Disclosure {
                key: "what-to-do",
                label: "Learn More About Critical First Steps",
                blocks: &[
                    Block::Card {
                        title: "Important to Know About California Workplace Injuries",
                        lines: &[
                            "Workers' comp only pays 2/3 of wages - Third-party claims recover 100%",
                            "No pain & suffering in workers' comp - Personal injury claims include these damages",
                            "Limited medical provider choice - Third-party claims allow your choice of doctors",
                            "OSHA violations strengthen claims - Safety violations prove negligence",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "injury-types",
        tab: Some(TabLabel { label: "INJURY TYPES", icon: Icon::HardHat }),
        heading: "Types of Workplace Injuries We Handle",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("We handle all types of workplace injuries with third-party liability potential:"),
            Block::Card {
                title: "",
                lines: &[
                    "Construction accidents and scaffold collapses",
                    "Equipment and machinery malfunctions",
                    "Toxic chemical exposure and poisoning",
                    "Vehicle accidents while working",
                    "Falls from heights and scaffolding",
                    "Electrocution and electrical injuries",
                    "Crane and heavy equipment accidents",
                    "Defective safety equipment failures",
                    "Industrial explosions and fires",
                    "Slip and fall accidents at worksites",
                    "Repetitive stress and ergonomic injuries",
                    "Workplace violence and assaults",
                    "Occupational diseases and illnesses",
                    "Heat-related injuries and heat stroke",
                    "Noise-induced hearing loss",
                    "Third-party negligence injuries",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "third-party",
        tab: Some(TabLabel { label: "THIRD-PARTY LIABILITY", icon: Icon::Shield }),
        heading: "Understanding Third-Party Liability",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("While California's workers' compensation system prevents direct lawsuits against employers under Labor Code § 3600's \"exclusive remedy\" rule, this protection has critical exceptions. When someone other than your employer causes your workplace injury, you can pursue both workers' compensation AND a third-party personal injury lawsuit."),
        ],
        disclosures: &[
            Disclosure {
                key: "third-party",
                label: "Learn More About Third-Party Defendants",
                blocks: &[
                    Block::Card {
                        title: "Subcontractors & General Contractors",
                        lines: &[
                            "On construction sites, multiple companies work simultaneously. If a subcontractor's negligence causes your injury - such as unsafe scaffolding installation, improper excavation, or failure to follow safety protocols - they can be held liable separately from your employer.",
                        ],
                    },
                    Block::Card {
                        title: "Property Owners",
                        lines: &[
                            "Building owners who fail to maintain safe premises, warn of hazards, or address known dangers face liability under California premises liability law. This includes structural defects, inadequate lighting, or dangerous conditions they knew or should have known about.",
                        ],
                    },
                    Block::Card {
                        title: "Equipment Manufacturers",
                        lines: &[
                            "Defective machinery, tools, or safety equipment that malfunction and cause injury create strict product liability claims. This includes design defects, manufacturing defects, or failure to provide adequate warnings about inherent dangers.",
                        ],
                    },
                    Block::Card {
                        title: "Negligent Drivers",
                        lines: &[
                            "If injured in a vehicle accident while working - whether as a delivery driver, traveling between job sites, or struck by a vehicle at a worksite - the at-fault driver and their insurance become liable for your full damages.",
                        ],
                    },
                ],
            },
        ],
    },
    Section {
        id: "compensation",
        tab: Some(TabLabel { label: "COMPENSATION", icon: Icon::DollarSign }),
        heading: "Compensation for Workplace Injuries",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Paragraph("Third-party workplace injury claims provide significantly more compensation than workers' compensation alone:"),
            Block::Card {
                title: "Full Compensation Available in Third-Party Claims:",
                lines: &[
                    "100% of lost wages (past and future)",
                    "All medical expenses",
                    "Pain and suffering",
                    "Emotional distress",
                    "Permanent disability/disfigurement",
                    "Loss of enjoyment of life",
                    "Loss of consortium for spouses",
                    "Punitive damages for egregious conduct",
                    "Future care costs",
                    "Vocational retraining",
                    "Home/vehicle modifications",
                    "Loss of earning capacity",
                ],
            },
            Block::Card {
                title: "Workers' Compensation Limitations:",
                lines: &[
                    "Only 2/3 of wages covered",
                    "No pain and suffering damages",
                    "Limited medical provider choice",
                    "No compensation for full losses",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "time-limits",
        tab: Some(TabLabel { label: "TIME LIMITS", icon: Icon::Clock }),
        heading: "Time Limits for California Workplace Injury Claims",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Critical Deadlines:",
                lines: &[
                    "Third-party claims: 2 years from injury date",
                    "Government entities: 6 months notice requirement",
                    "Workers' compensation: Report within 30 days, file within 1 year",
                    "Defective products: May have extended deadlines",
                    "Toxic exposure: 3 years from discovery of illness",
                    "Don't delay - evidence disappears quickly in workplace injury cases. Surveillance footage gets deleted, witnesses forget details, and accident scenes get cleaned up. Contact us immediately to preserve crucial evidence and protect your rights.",
                ],
            },
        ],
        disclosures: &[],
    },
    Section {
        id: "faq",
        tab: Some(TabLabel { label: "FAQ", icon: Icon::HelpCircle }),
        heading: "Frequently Asked Questions",
        kind: SectionKind::Faq(FaqSection { preview: None, view_all: None }),
        blocks: &[
        ],
        disclosures: &[],
    },
    Section {
        id: "resources",
        tab: Some(TabLabel { label: "RESOURCES", icon: Icon::Building }),
        heading: "Additional Resources",
        kind: SectionKind::Prose,
        blocks: &[
            Block::Card {
                title: "Compensation Calculator",
                lines: &[
                    "Get an estimate of your potential workplace injury compensation.",
                ],
            },
            Block::Card {
                title: "Medical Guidance",
                lines: &[
                    "Understanding medical care and documentation for workplace injuries.",
                ],
            },
        ],
        disclosures: &[],
    },
];

pub(super) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What damages can I recover in a third-party workplace injury lawsuit?",
        answer: "Third-party claims allow full compensation including: 100% of lost wages (past and future), all medical expenses, pain and suffering, emotional distress, permanent disability/disfigurement, loss of enjoyment of life, loss of consortium for spouses, punitive damages for egregious conduct, future care costs, vocational retraining, and home/vehicle modifications. This far exceeds workers' comp which only covers medical care and 2/3 of wages with no pain and suffering.",
    },
    FaqEntry {
        question: "What's the time limit to file a workplace injury claim in California?",
        answer: "California generally allows 2 years from the injury date to file a personal injury lawsuit against third parties. However, different deadlines apply: 6 months for government entity claims, 1 year for some defective product claims, 3 years for toxic exposure/latent injuries, and extended time for minors. Workers' comp has separate deadlines: report to employer within 30 days, file claim within 1 year. Don't delay - evidence disappears and witnesses forget.",
    },
    FaqEntry {
        question: "Who can be held liable as a third party in workplace accidents?",
        answer: "Common third parties include: subcontractors and general contractors on construction sites, property owners who fail to maintain safe premises, equipment manufacturers (defective machinery/tools), negligent drivers who cause work-related vehicle accidents, architects/engineers whose designs create hazards, maintenance companies, security companies, chemical/material suppliers, temporary staffing agencies, and customers/clients who assault workers. Anyone besides your employer and co-workers potentially faces liability.",
    },
    FaqEntry {
        question: "What if I was partially at fault for my workplace injury?",
        answer: "California follows pure comparative negligence, meaning you can recover even if 99% at fault, though your award reduces by your fault percentage. For example, if damages are $500,000 and you're 30% at fault, you receive $350,000. Workers' comp provides benefits regardless of fault. In third-party claims, defendants will try to shift blame to you - skilled attorneys minimize your assigned fault percentage through evidence and advocacy.",
    },
    FaqEntry {
        question: "How do OSHA violations affect my workplace injury claim?",
        answer: "OSHA violations provide powerful evidence of negligence in third-party claims. Citations prove the defendant breached safety standards causing your injury. Serious violations can establish 'negligence per se' - automatic proof of negligence. Willful violations support punitive damages. In workers' comp, serious and willful violations by employers can increase benefits by 50%. We obtain OSHA inspection reports, citations, and investigation files to strengthen your claim.",
    },
    FaqEntry {
        question: "Do I have to pay back workers' comp if I win a third-party lawsuit?",
        answer: "Workers' comp insurers have subrogation rights to recover benefits paid from your third-party settlement. However, California law provides protections: insurers must share attorney fees/costs proportionally, liens often reduce through negotiation, future medical credits apply, and the 'made whole' doctrine may eliminate reimbursement if you're not fully compensated. Strategic settlement allocation between economic/non-economic damages minimizes reimbursement. We handle lien negotiations to maximize your net recovery.",
    },
    FaqEntry {
        question: "What if my employer doesn't have workers' compensation insurance?",
        answer: "Uninsured employers face serious consequences: you can sue them directly in civil court for full damages (bypassing workers' comp limits), file a claim with California's Uninsured Employers Benefits Trust Fund for benefits, and the employer faces criminal prosecution and stop-work orders. Personal assets become available for collection. Labor Code § 3706 presumes employer negligence caused injury, shifting burden of proof. This violation alone often leads to quick settlements.",
    },
    FaqEntry {
        question: "Can I file a claim if exposed to toxic chemicals but not sick yet?",
        answer: "Yes, through medical monitoring claims. If exposed to hazardous substances creating increased disease risk, you can recover costs of future medical surveillance to detect early disease onset. California recognizes medical monitoring for asbestos, silica, benzene, and other toxins. Early detection improves treatment outcomes. Additionally, the statute of limitations may not begin until disease manifests (discovery rule), preserving future claims. Document all exposures now.",
    },
    FaqEntry {
        question: "What if I'm an independent contractor injured at work?",
        answer: "True independent contractors aren't covered by workers' comp but can sue any party whose negligence caused injury, including the hiring company. However, California's ABC test strictly limits independent contractor classification - many 'contractors' are actually employees entitled to workers' comp. Misclassification itself creates liability. Gig workers (Uber, DoorDash) face unique challenges. We analyze your actual work relationship to determine all available claims.",
    },
    FaqEntry {
        question: "Can I sue if injured by defective safety equipment?",
        answer: "Yes, defective safety equipment creates strong product liability claims against manufacturers, distributors, and sellers. This includes faulty harnesses, defective respirators, failing safety guards, malfunctioning emergency stops, and inadequate protective gear. Strict liability applies - you need only prove the defect existed and caused injury. The employer's workers' comp immunity doesn't protect equipment manufacturers. Failure of safety equipment often results in severe injuries justifying substantial damages.",
    },
    FaqEntry {
        question: "What if injured in a vehicle accident while working?",
        answer: "Work-related vehicle accidents create multiple claims: workers' comp from your employer, third-party claim against the at-fault driver, uninsured/underinsured motorist coverage if applicable, and potentially claims against vehicle manufacturers for defects. This includes delivery drivers, traveling between job sites, or running work errands. The 'going and coming' rule has exceptions. Commercial policies often provide higher coverage limits than personal auto insurance, increasing recovery potential.",
    },
    FaqEntry {
        question: "How are construction site injuries handled with multiple contractors?",
        answer: "Construction sites involve complex liability with general contractors, subcontractors, property owners, architects, and equipment suppliers potentially liable. General contractors often have non-delegable duties for site safety regardless of subcontractor involvement. Each entity's insurance provides potential recovery. California's Privette doctrine limits but doesn't eliminate contractor liability. We investigate all parties' roles, safety responsibilities, and insurance coverage to maximize recovery sources.",
    },
    FaqEntry {
        question: "What if my injury aggravated a pre-existing condition?",
        answer: "The 'eggshell plaintiff' rule means defendants take victims as they find them. If workplace injury aggravates, accelerates, or lights up a pre-existing condition, you recover for all resulting harm. Workers' comp covers aggravation of pre-existing conditions. Third-party defendants remain fully liable even if someone else may not have been injured as severely. Medical evidence distinguishing new injury from pre-existing condition is crucial. Don't let insurance companies blame everything on prior conditions.",
    },
    FaqEntry {
        question: "Can family members sue if I'm killed in a workplace accident?",
        answer: "Yes, families can pursue: workers' comp death benefits (burial costs and dependents' support), wrongful death lawsuits against third parties for full damages, and survival actions for the deceased's pre-death pain and suffering. Wrongful death damages include lost financial support, household services value, and loss of companionship. Spouses, children, and financial dependents can recover. California's 2-year statute of limitations applies. These cases require sensitive handling while aggressively pursuing maximum recovery.",
    },
    FaqEntry {
        question: "What if I'm injured by workplace violence?",
        answer: "Workplace violence creates multiple claims: workers' comp covers most workplace assaults, third-party claims against attackers (customers, patients, criminals), premises liability against property owners for inadequate security, and potentially employer liability for negligent hiring/retention of dangerous employees. California's new Workplace Violence Prevention law (SB 553) creates additional employer duties. Criminal prosecution doesn't prevent civil claims. Victim compensation funds may provide additional recovery.",
    },
    FaqEntry {
        question: "How much is my workplace injury case worth?",
        answer: "Case value depends on injury severity, medical expenses, lost wages, permanent disability, pain and suffering, and defendant liability. Minor injuries may settle for tens of thousands while catastrophic injuries reach millions. Factors include: total medical costs (past and future), wage loss and earning capacity, disability rating, age and life expectancy, pain and suffering multipliers, available insurance coverage, strength of liability evidence, and comparative fault allocation. We evaluate all factors to maximize recovery.",
    },
    FaqEntry {
        question: "Should I accept the insurance company's settlement offer?",
        answer: "Never accept initial offers without legal consultation. Insurance companies offer quick, lowball settlements hoping you'll accept before understanding your case's true value. Early offers rarely account for future medical needs, full wage loss, or pain and suffering. Once you accept and sign a release, you cannot pursue additional compensation even if injuries worsen. Our former defense attorney experience reveals their tactics. We evaluate offers and negotiate maximum settlements.",
    },
    FaqEntry {
        question: "What if I'm afraid to report my injury due to immigration status?",
        answer: "California protects all workers regardless of immigration status. You're entitled to workers' comp benefits and can pursue third-party claims. Labor Code § 1171.5 prohibits employers from threatening immigration-related retaliation for asserting workplace rights. Courts exclude immigration status from injury cases as irrelevant and prejudicial. Employers who threaten deportation face additional liability. Your safety and compensation rights don't depend on documentation status. We protect client confidentiality.",
    },
    FaqEntry {
        question: "Can I get fired for filing a workplace injury claim?",
        answer: "No, firing you for filing a workers' comp or injury claim is illegal retaliation under Labor Code § 132a. Retaliation includes termination, demotion, reduction in hours, harassment, or any adverse employment action. If retaliated against, you can receive: reinstatement with back pay, increased workers' comp benefits (up to $10,000), attorney fees, and potential wrongful termination lawsuit with additional damages. Document all employer actions following your injury report. Retaliation claims strengthen your overall case and often lead to larger settlements.",
    },
    FaqEntry {
        question: "What if I didn't report my injury immediately?",
        answer: "Late reporting doesn't necessarily bar your claim. Workers' comp requires reporting 'as soon as practicable' - reasonable delays due to medical emergencies, unconsciousness, or not immediately recognizing injury severity are often acceptable. Third-party claims have separate notice requirements and deadlines. However, delayed reporting weakens your case as evidence deteriorates and employer defenses strengthen. Report as soon as possible and document reasons for any delay. Medical records showing treatment can help establish injury timing.",
    },
    FaqEntry {
        question: "What constitutes a serious and willful misconduct by an employer?",
        answer: "Serious and willful misconduct requires the employer to know their conduct will likely cause serious injury and deliberately ignore that risk. Examples include: knowingly requiring unsafe work without protection, deliberately removing safety equipment, ordering work with knowledge of specific safety violations, and continuing dangerous practices after repeated warnings. If proven, workers' comp benefits increase by 50% and additional penalties apply. This is difficult to prove but significantly increases compensation when established.",
    },
    FaqEntry {
        question: "Can I choose my own doctor for workplace injuries?",
        answer: "Workers' comp limits your doctor choice to pre-designated networks, but third-party claims allow complete physician freedom. If you notify your employer in writing before injury, you can choose your doctor for workers' comp treatment. Emergency care allows any provider. After 30 days with the insurance doctor, you can request a one-time change within the network. Poor care or disputes about treatment may justify additional changes. Independent medical evaluations often favor insurance companies.",
    },
    FaqEntry {
        question: "What evidence should I preserve after a workplace injury?",
        answer: "Critical evidence includes: photographs of accident scene, equipment, and hazards, medical records and doctor reports, witness contact information and statements, equipment maintenance records, safety training records, OSHA reports and citations, surveillance video footage, incident reports, weather conditions if relevant, and personal injury documentation through photos and journals. Evidence disappears quickly - document everything immediately. Your attorney can issue preservation notices requiring defendants to maintain evidence.",
    },
    FaqEntry {
        question: "How does workers' compensation affect my third-party claim?",
        answer: "Workers' comp and third-party claims proceed simultaneously but separately. Workers' comp provides immediate medical coverage and wage replacement while your third-party case develops. This ensures you receive treatment and support during litigation. However, workers' comp insurers have subrogation rights to recover benefits from third-party settlements. Strategic coordination between both claims maximizes total recovery while protecting your rights in each proceeding.",
    },
    FaqEntry {
        question: "What if the equipment causing my injury was recalled after my accident?",
        answer: "Post-accident recalls provide powerful evidence of defects and manufacturer knowledge. Recalls admit the product poses unreasonable safety risks, strengthening your product liability claim. This evidence often leads to favorable settlements as it undermines manufacturer defenses. However, recalls don't automatically prove your specific injury resulted from the defect - medical and engineering evidence must still connect the recall issues to your injuries. Timing of manufacturer knowledge is crucial for punitive damages.",
    },
    FaqEntry {
        question: "Can I sue if injured due to lack of proper safety training?",
        answer: "Inadequate safety training creates liability for third parties with training duties, including general contractors, safety consultants, and training companies. Employers have workers' comp immunity for training failures, but third parties don't. OSHA requires specific training for hazardous work - violations establish negligence. Temporary staffing agencies may face liability for inadequate worker preparation. Poor training combined with complex equipment or hazardous conditions strengthens claims against multiple defendants.",
    },
    FaqEntry {
        question: "What if I'm a union member injured at work?",
        answer: "Union membership doesn't limit your injury claims. You still have workers' comp rights and can pursue third-party claims. Union contracts may provide additional benefits or grievance procedures, but can't waive your statutory rights. Some unions have supplemental injury benefits or legal assistance programs. Union safety representatives can help document hazards and violations. Collective bargaining agreements might affect arbitration requirements for employment disputes but not personal injury claims against third parties.",
    },
    FaqEntry {
        question: "How do scaffold collapses get investigated for liability?",
        answer: "Scaffold accidents require immediate investigation before evidence disappears. Potential defendants include scaffold manufacturers, rental companies, erection contractors, and general contractors. OSHA investigates serious accidents and issues citations providing liability evidence. Expert engineers examine scaffold design, assembly, and maintenance. Weather, overloading, and improper modification often contribute. Multiple parties typically share liability. Scaffold company insurance and general contractor coverage provide multiple recovery sources. Photos and witness statements must be obtained immediately.",
    },
    FaqEntry {
        question: "What compensation is available for occupational diseases?",
        answer: "Occupational diseases like silicosis, asbestosis, and chemical poisoning qualify for workers' comp and third-party claims. Workers' comp covers medical treatment and disability benefits. Third-party claims against manufacturers of toxic substances often provide larger recovery. Latent diseases may not manifest for years - the statute of limitations typically begins when disease is diagnosed, not exposure date. Medical monitoring claims may recover future surveillance costs even before disease develops.",
    },
    FaqEntry {
        question: "Can I sue for repetitive stress injuries?",
        answer: "Repetitive stress injuries (RSI) qualify for workers' comp benefits and potential third-party claims. If defective equipment, poor ergonomic design, or inadequate workplace setup caused your RSI, manufacturers and designers face liability. Workers' comp covers carpal tunnel, back injuries, and other repetitive trauma. Third-party claims require proving specific equipment defects or design failures caused your condition. Cumulative injuries are harder to prove but still recoverable with proper medical evidence.",
    },
    FaqEntry {
        question: "What if I'm injured by a co-worker's assault?",
        answer: "Co-worker assaults generally fall under workers' comp since they occur at work, but exceptions exist. If the assault is purely personal and unrelated to work, you may sue the co-worker directly. Employer liability depends on whether they knew of violent tendencies and failed to protect you. Third-party liability may exist if inadequate security, drug/alcohol policies, or negligent hiring contributed. Criminal charges against the co-worker don't prevent civil claims.",
    },
    FaqEntry {
        question: "How are crane accidents investigated for liability?",
        answer: "Crane accidents involve multiple potential defendants: crane manufacturers, maintenance companies, operators, general contractors, and property owners. OSHA investigates serious crane accidents and issues detailed reports. Expert analysis examines mechanical failures, operator error, inadequate maintenance, overloading, and environmental factors. Crane inspection records, operator certifications, and maintenance logs provide crucial evidence. Multiple insurance policies typically apply. These cases often result in substantial settlements due to severe injuries and clear liability evidence.",
    },
    FaqEntry {
        question: "What if injured by falling tools or materials?",
        answer: "Falling object injuries require investigation of site safety protocols, tool securement, and overhead work procedures. Potential defendants include contractors working above, tool manufacturers (if defective), and general contractors responsible for site safety. OSHA has specific requirements for overhead protection and tool handling. Workers' comp covers the injury while third-party claims pursue additional recovery. Security cameras and witness testimony help establish how objects fell and identify responsible parties.",
    },
    FaqEntry {
        question: "Can I sue for slip and fall accidents at work?",
        answer: "Workplace slip and falls qualify for workers' comp, with third-party claims possible against property owners, maintenance companies, or contractors who created hazardous conditions. If you're working at a client's location and they failed to maintain safe conditions, they may face premises liability. Cleaning companies, snow removal contractors, and maintenance firms often face liability. Document the hazard immediately with photos and witness statements.",
    },
    FaqEntry {
        question: "What if injured by exploding equipment?",
        answer: "Equipment explosions create strong product liability claims against manufacturers, especially if caused by design defects, manufacturing flaws, or inadequate warnings. Pressure vessel failures, electrical explosions, and chemical reactions often involve multiple defendants. OSHA and fire department investigations provide crucial evidence. Expert analysis determines causes and responsible parties. These catastrophic events typically result in severe injuries justifying substantial damages against multiple defendants with significant insurance coverage.",
    },
    FaqEntry {
        question: "How do heat-related workplace injuries get compensated?",
        answer: "Heat exhaustion and heat stroke qualify for workers' comp benefits. Third-party liability may exist if cooling equipment manufacturers provided defective systems or contractors failed to provide adequate protection. OSHA has heat illness prevention requirements - violations strengthen claims. Employers with outdoor workers face heightened duties. Workers' comp covers medical treatment and lost wages while third-party claims pursue additional damages for preventable heat injuries.",
    },
    FaqEntry {
        question: "What if injured due to inadequate lighting?",
        answer: "Poor lighting contributing to workplace injuries creates liability for property owners, electrical contractors, and potentially lighting manufacturers. OSHA has illumination standards for various work environments. If working at a client's location with inadequate lighting, premises liability claims may apply. Workers' comp covers the injury while pursuing third-party claims against parties responsible for lighting. Documentation of lighting levels and photographs of conditions strengthen claims.",
    },
    FaqEntry {
        question: "Can I claim for injuries during required safety training?",
        answer: "Injuries during mandatory safety training qualify for workers' comp as work-related activities. If training equipment was defective or training providers were negligent, third-party claims may apply. This includes injuries during confined space training, fall protection courses, or equipment operation training. Training companies and equipment manufacturers face potential liability. Poor facility conditions where training occurs may create premises liability claims.",
    },
    FaqEntry {
        question: "What if injured by unmarked hazards?",
        answer: "Unmarked workplace hazards violate OSHA standards and create liability for parties responsible for warning workers. This includes unmarked excavations, chemical hazards, electrical dangers, and fall risks. Property owners, general contractors, and hazard creators may face liability. Workers' comp provides immediate benefits while pursuing third-party claims. Lack of proper signage, barriers, or warnings strengthens negligence claims. Document the absence of warnings immediately.",
    },
    FaqEntry {
        question: "How are forklift accidents handled legally?",
        answer: "Forklift accidents may involve multiple defendants: forklift manufacturers (if defective), maintenance companies, operators (if not co-workers), and companies controlling the work area. OSHA has specific forklift operation requirements. Workers' comp covers injuries while third-party claims pursue additional recovery. Operator certification, maintenance records, and OSHA compliance are key evidence. Forklift modifications or safety device removals strengthen liability claims.",
    },
    FaqEntry {
        question: "What if injured by contaminated water at work?",
        answer: "Contaminated water exposure creates multiple potential claims. Workers' comp covers immediate illness while third-party claims may target water suppliers, treatment companies, or equipment manufacturers. This includes Legionnaires' disease, chemical contamination, and bacterial infections. Property owners maintaining water systems may face premises liability. Document all symptoms and medical treatment immediately. Water testing results and CDC investigations provide crucial evidence.",
    },
    FaqEntry {
        question: "Can I sue for noise-induced hearing loss?",
        answer: "Occupational hearing loss qualifies for workers' comp benefits including medical treatment and permanent disability payments. Third-party claims may target equipment manufacturers if noise levels exceeded safe limits or hearing protection was defective. OSHA noise exposure standards establish liability benchmarks. Audiogram testing documents progression of hearing loss. Equipment modification or removal of noise controls strengthens claims against multiple defendants.",
    },
    FaqEntry {
        question: "What if injured in workplace parking lots?",
        answer: "Parking lot injuries depend on who controls the lot and caused the dangerous condition. If your employer owns the lot, workers' comp typically applies. If a third party (property manager, maintenance company) controls the lot, premises liability claims are possible. This includes potholes, inadequate lighting, ice/snow removal failures, and security issues. Document conditions immediately and determine lot ownership and maintenance responsibilities.",
    },
    FaqEntry {
        question: "How do electrocution cases work with multiple parties?",
        answer: "Electrical injuries often involve utilities, electrical contractors, equipment manufacturers, and property owners. OSHA investigates serious electrical accidents. Utility companies face liability for unmarked lines or power surges. Electrical contractors may have improper installation or maintenance. Equipment manufacturers face product liability for defective electrical components. Multiple insurance policies and deep-pocket defendants typically result in substantial settlements for these severe injuries.",
    },
    FaqEntry {
        question: "What if injured due to missing safety guards?",
        answer: "Missing or removed safety guards violate OSHA standards and create strong liability against parties responsible for equipment maintenance. This includes manufacturers who failed to provide adequate guards, employers who removed guards, and maintenance companies who failed to replace them. Workers' comp covers immediate benefits while pursuing third-party claims. Documentation of missing guards and OSHA citations strengthen claims against multiple responsible parties.",
    },
    FaqEntry {
        question: "Can I recover for psychological trauma from workplace accidents?",
        answer: "Psychological trauma from workplace accidents qualifies for workers' comp psychiatric injury benefits if you can prove the work stress caused your condition. Third-party claims include pain and suffering damages for PTSD, anxiety, and depression. Witnessing co-worker deaths or suffering catastrophic injuries often causes severe psychological harm. Mental health treatment records document damages. Psychological injuries add substantial value to third-party claims beyond physical harm.",
    },
    FaqEntry {
        question: "What if I'm injured during disaster response work?",
        answer: "Emergency response workers injured during disasters face complex workers' comp and liability issues. Federal disaster declarations may affect benefits and deadlines. Third-party contractors, equipment suppliers, and property owners may face liability despite emergency conditions. Volunteer responders may lack workers' comp coverage but can pursue third-party claims. Document dangerous conditions and equipment failures during emergency response work. Special federal programs may provide additional benefits.",
    },
    FaqEntry {
        question: "How do multi-state workplace injuries get handled?",
        answer: "Workers injured while traveling between states for work may file workers' comp in multiple jurisdictions. California's generous workers' comp system often applies if you're a California employee. Third-party claims file where the injury occurred or where defendants are located. Choice of law issues affect damages and deadlines. Interstate truckers and traveling workers face unique challenges requiring analysis of multiple state laws and insurance coverage.",
    },
    FaqEntry {
        question: "What if injured by security failures at work?",
        answer: "Inadequate workplace security leading to injuries creates premises liability against property owners and security companies. This includes inadequate lighting, broken locks, missing cameras, and insufficient security personnel. Workers' comp covers assault injuries while third-party claims pursue additional recovery. Businesses have duties to protect workers from foreseeable criminal acts. Prior crime reports and security assessments establish notice of dangers and liability for preventable violence.",
    },
    FaqEntry {
        question: "Can I claim for injuries in company vehicles?",
        answer: "Company vehicle accidents create multiple claims: workers' comp, third-party auto liability against other drivers, and potentially product liability against vehicle manufacturers. Commercial vehicle policies often provide higher coverage than personal auto insurance. Vehicle maintenance companies may face liability for mechanical failures. Fleet management companies controlling vehicle safety may also bear responsibility. These accidents often result in substantial settlements due to multiple insurance sources.",
    },
    FaqEntry {
        question: "What should I know about federal contractor workplace injuries?",
        answer: "Federal contractors often have additional safety requirements and insurance mandates beyond state law. Defense Base Act coverage may apply for overseas work. Federal facilities have unique safety protocols and investigation procedures. Government immunity may limit some claims while contractor liability remains. Multiple federal agencies may investigate serious accidents providing extensive documentation. Federal contractor insurance requirements often result in higher policy limits and better coverage for injury victims.",
    },
];
