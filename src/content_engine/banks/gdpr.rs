//! GDPR bank — lawful bases, individual rights, and controller obligations.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::Gdpr;
    vec![
        q(
            t,
            "What does GDPR stand for?",
            [
                "General Data Protection Regulation",
                "Global Data Privacy Rules",
                "Government Data Protection Requirements",
                "General Digital Privacy Rights",
            ],
            0,
            "GDPR stands for General Data Protection Regulation (Regulation (EU) 2016/679), the EU's comprehensive data protection law effective from May 2018.",
        ),
        q(
            t,
            "What is the maximum fine for GDPR violations?",
            ["€10 million", "€20 million", "€30 million", "€40 million"],
            1,
            "Maximum fines are the higher of €20 million or 4% of global annual turnover for serious violations, and €10 million or 2% for other infringements.",
        ),
        q(
            t,
            "How long do organisations have to report a data breach to the ICO?",
            ["24 hours", "72 hours", "7 days", "30 days"],
            1,
            "Organisations must report data breaches to the Information Commissioner's Office (ICO) within 72 hours of becoming aware, unless the breach is unlikely to result in risk.",
        ),
        q(
            t,
            "What is the lawful basis for processing personal data under GDPR?",
            [
                "Consent, contract, legal obligation, vital interests, public task, legitimate interests",
                "Business need, customer preference, industry standard, company policy",
                "Profitability, market research, advertising, sales requirements",
                "Technical capability, storage availability, data quantity, processing speed",
            ],
            0,
            "The six lawful bases under Article 6 are: consent, contract, legal obligation, vital interests, public task, and legitimate interests. At least one must apply.",
        ),
        q(
            t,
            "What is the right to data portability?",
            [
                "Right to receive personal data in a structured, commonly used format",
                "Right to transfer data between cloud services",
                "Right to access data on portable devices",
                "Right to physically move data storage locations",
            ],
            0,
            "The right to data portability allows individuals to obtain and reuse their personal data across different services in a structured, commonly used, machine-readable format.",
        ),
        q(
            t,
            "What must be included in a Privacy Notice under GDPR?",
            [
                "Identity of data controller, purposes of processing, data retention periods, rights of individuals",
                "Company history, employee details, financial information, marketing plans",
                "Technical specifications, software versions, server locations, backup schedules",
                "Product prices, service offerings, customer testimonials, contact information",
            ],
            0,
            "Privacy Notices must include controller identity, DPO contact details, processing purposes, legal basis, data retention periods, and individual rights information.",
        ),
        q(
            t,
            "What is the role of a Data Protection Officer (DPO)?",
            [
                "Monitor compliance, provide advice, act as contact point for data subjects and authorities",
                "Manage IT security, handle data backups, maintain server infrastructure",
                "Oversee marketing campaigns, manage customer databases, analyze sales data",
                "Develop software applications, test security protocols, implement encryption",
            ],
            0,
            "The DPO monitors GDPR compliance, advises on data protection impact assessments, acts as contact point for data subjects and supervisory authorities.",
        ),
        q(
            t,
            "What is a Data Protection Impact Assessment (DPIA)?",
            [
                "Assessment of data protection risks before processing activities",
                "Annual review of security incidents",
                "Audit of data storage facilities",
                "Evaluation of employee data handling training",
            ],
            0,
            "A DPIA is required for high-risk processing activities to assess and mitigate risks to individuals' rights and freedoms before processing begins.",
        ),
        q(
            t,
            "How long should personal data be retained?",
            [
                "No longer than necessary for the purposes collected",
                "Indefinitely for business continuity",
                "Until the individual requests deletion",
                "For the lifetime of the business",
            ],
            0,
            "Data should not be kept longer than necessary for the purposes it was collected. Retention periods must be defined and justified.",
        ),
        q(
            t,
            "What is the 'right to be forgotten'?",
            [
                "Right to have personal data erased in certain circumstances",
                "Right to delete social media accounts",
                "Right to remove information from search engines",
                "Right to destroy physical records",
            ],
            0,
            "The right to erasure (right to be forgotten) allows individuals to request deletion of their personal data in specific circumstances under Article 17.",
        ),
        q(
            t,
            "What is 'pseudonymisation' under GDPR?",
            [
                "Processing data so it can't be attributed to a specific individual without additional information",
                "Replacing names with codes",
                "Encrypting all personal data",
                "Removing all identifying information",
            ],
            0,
            "Pseudonymisation processes data so it cannot be attributed to a specific data subject without additional information kept separately and secured.",
        ),
        q(
            t,
            "When must organisations appoint a Data Protection Officer?",
            [
                "When processing is carried out by a public authority, or core activities involve regular monitoring of data subjects on a large scale",
                "When company has more than 50 employees",
                "When processing customer data for marketing",
                "When using cloud storage services",
            ],
            0,
            "DPO appointment is mandatory for public authorities and organisations whose core activities involve regular, systematic monitoring of data subjects on a large scale.",
        ),
        q(
            t,
            "What is the 'one-stop shop' mechanism?",
            [
                "Organisations dealing with cross-border processing deal mainly with lead supervisory authority",
                "Single contact point for all data protection queries",
                "Centralized database for all personal data",
                "Unified GDPR compliance software",
            ],
            0,
            "The one-stop shop mechanism allows organisations operating in multiple EU countries to deal mainly with the supervisory authority in their main establishment country.",
        ),
        q(
            t,
            "What is the age of consent for children's data processing?",
            ["13", "16", "18", "21"],
            1,
            "The age of consent is 16, though member states can lower it to no less than 13. In the UK, it's 13, requiring parental consent for children under 13.",
        ),
        q(
            t,
            "What is the difference between a data controller and a data processor?",
            [
                "Controller determines purposes and means of processing, processor processes on controller's behalf",
                "Controller stores data, processor analyzes data",
                "Controller collects data, processor deletes data",
                "Controller is the individual, processor is the organisation",
            ],
            0,
            "Controllers determine why and how personal data is processed. Processors act on the controller's instructions. Both have specific GDPR obligations.",
        ),
        q(
            t,
            "What must be included in a Data Processing Agreement?",
            [
                "Subject matter, duration, nature and purpose of processing, type of personal data, obligations of parties",
                "Financial terms, service levels, termination clauses, payment schedules",
                "Technical specifications, software requirements, hardware details, network configurations",
                "Marketing strategies, customer acquisition targets, sales projections, growth plans",
            ],
            0,
            "Article 28 requires written contracts specifying subject matter, duration, nature and purpose of processing, data types, obligations, and security measures.",
        ),
        q(
            t,
            "What are the principles of data protection by design and by default?",
            [
                "Integrate data protection into processing activities and default settings from the outset",
                "Design systems after data collection, apply defaults as needed",
                "Protect data during design phase, default to minimum security",
                "Design for compliance, default to opt-out models",
            ],
            0,
            "Data protection by design integrates data protection into processing activities from design stage. By default ensures only necessary data is processed by default.",
        ),
        q(
            t,
            "What is the right to restriction of processing?",
            [
                "Right to limit processing of personal data in certain circumstances",
                "Right to slow down data processing speed",
                "Right to restrict access to certain databases",
                "Right to limit data storage locations",
            ],
            0,
            "Individuals can restrict processing when accuracy is contested, processing is unlawful, or data is no longer needed but required for legal claims.",
        ),
        q(
            t,
            "What constitutes 'special category data'?",
            [
                "Data revealing racial/ethnic origin, political opinions, religious beliefs, genetic data, biometric data, health data, sex life/orientation",
                "Financial information, credit scores, banking details",
                "Employment history, educational qualifications, professional certifications",
                "Online browsing history, shopping preferences, social media activity",
            ],
            0,
            "Special category data requires additional protection and lawful bases under Article 9, such as explicit consent or substantial public interest.",
        ),
        q(
            t,
            "How should consent be obtained under GDPR?",
            [
                "Freely given, specific, informed, unambiguous, with clear affirmative action",
                "Implied from continued use of service",
                "Included in terms and conditions",
                "Assumed unless individual objects",
            ],
            0,
            "Consent must be a clear affirmative act, freely given, specific, informed, and unambiguous. Pre-ticked boxes or inactivity don't constitute consent.",
        ),
        q(
            t,
            "What is the right to object to processing?",
            [
                "Right to object to processing based on legitimate interests or direct marketing",
                "Right to object to any data processing",
                "Right to object to data sharing with third parties",
                "Right to object to data storage methods",
            ],
            0,
            "Individuals have absolute right to object to direct marketing, and right to object to processing based on legitimate interests or public task.",
        ),
        q(
            t,
            "What records must be kept under Article 30?",
            [
                "Records of processing activities including purposes, categories, recipients, retention periods",
                "Records of all data breaches regardless of severity",
                "Records of employee training sessions",
                "Records of software updates and patches",
            ],
            0,
            "Article 30 requires controllers and processors (except SMEs with low-risk processing) to maintain records of processing activities.",
        ),
        q(
            t,
            "What is the role of supervisory authorities?",
            [
                "Monitor and enforce GDPR, provide guidance, handle complaints",
                "Issue fines for all violations",
                "Certify all data protection software",
                "Approve all privacy policies",
            ],
            0,
            "Supervisory authorities (like ICO in UK) monitor GDPR application, provide advice, handle complaints, and enforce compliance through investigations and fines.",
        ),
        q(
            t,
            "What is 'automated decision-making' under GDPR?",
            [
                "Decisions made by automated means without human involvement",
                "Computer-assisted decision support systems",
                "Any decision involving technology",
                "Statistical analysis of data",
            ],
            0,
            "Automated decision-making includes profiling that produces legal or similarly significant effects. Individuals have right to human intervention and explanation.",
        ),
        q(
            t,
            "What are Binding Corporate Rules?",
            [
                "Internal rules for transferring personal data within multinational organisations",
                "Mandatory policies for all employees",
                "Industry standards for data protection",
                "Contractual requirements for suppliers",
            ],
            0,
            "BCRs allow multinational organisations to transfer personal data internationally within their group while ensuring adequate data protection safeguards.",
        ),
        q(
            t,
            "What is the deadline for responding to a Subject Access Request?",
            ["1 month", "2 months", "3 months", "6 months"],
            0,
            "Organisations must respond to SARs within one month, extendable by two additional months for complex or numerous requests.",
        ),
        q(
            t,
            "What constitutes a personal data breach?",
            [
                "Breach of security leading to accidental or unlawful destruction, loss, alteration, unauthorised disclosure/access",
                "Any unauthorised access to systems",
                "Loss of encrypted data",
                "System downtime affecting data availability",
            ],
            0,
            "A breach includes confidentiality, integrity, or availability breaches. Not all require notification - only those likely to result in risk to rights.",
        ),
        q(
            t,
            "What are the conditions for international data transfers?",
            [
                "Adequacy decision, appropriate safeguards, specific derogations",
                "Encryption during transfer, secure storage, regular audits",
                "Consent from all data subjects, notification to authorities, impact assessment",
                "Contractual agreements, insurance coverage, compliance certification",
            ],
            0,
            "Transfers require adequacy decision, appropriate safeguards (SCCs, BCRs), or specific derogations like explicit consent or contract necessity.",
        ),
        q(
            t,
            "What is the purpose of certification mechanisms under GDPR?",
            [
                "Demonstrate compliance through approved certification schemes",
                "Certify all data protection officers",
                "Approve all privacy software",
                "Validate all encryption methods",
            ],
            0,
            "Certification mechanisms allow organisations to demonstrate GDPR compliance through approved certification schemes, enhancing trust and transparency.",
        ),
        q(
            t,
            "What is the accountability principle?",
            [
                "Responsibility to demonstrate compliance with all GDPR principles",
                "Accountability for all data breaches",
                "Responsibility to report all processing activities",
                "Accountability to data subjects for errors",
            ],
            0,
            "The accountability principle requires controllers to be responsible for, and able to demonstrate, compliance with all GDPR principles.",
        ),
    ]
}
