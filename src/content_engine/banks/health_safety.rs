//! Health & safety bank — HSWA duties, risk assessment, and UK regulations.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::HealthSafety;
    vec![
        q(
            t,
            "What is the main purpose of the Health and Safety at Work Act 1974?",
            [
                "To ensure employers protect health, safety and welfare of employees",
                "To set minimum wage standards",
                "To regulate working hours",
                "To establish trade union rights",
            ],
            0,
            "The HSWA 1974 is the primary legislation covering occupational health and safety in Great Britain, imposing duties on employers to ensure employee safety.",
        ),
        q(
            t,
            "What does RIDDOR stand for?",
            [
                "Reporting of Injuries, Diseases and Dangerous Occurrences Regulations",
                "Recording of Incidents, Damages and Dangerous Operations Register",
                "Register of Industrial Diseases and Dangerous Occurrence Reports",
                "Regulation of Injury Documentation and Dangerous Occurrence Recording",
            ],
            0,
            "RIDDOR 2013 requires reporting of specified workplace incidents to the Health and Safety Executive (HSE), including deaths, major injuries, and dangerous occurrences.",
        ),
        q(
            t,
            "What is a risk assessment?",
            [
                "Systematic examination of workplace hazards to identify and control risks",
                "Assessment of employee performance and safety compliance",
                "Evaluation of workplace productivity and efficiency",
                "Analysis of insurance requirements and coverage",
            ],
            0,
            "Risk assessments identify hazards, evaluate risks, and implement control measures, required by the Management of Health and Safety at Work Regulations 1999.",
        ),
        q(
            t,
            "What does the hierarchy of control measures prioritize?",
            [
                "Elimination, substitution, engineering controls, administrative controls, PPE",
                "Training, supervision, monitoring, enforcement, discipline",
                "Insurance, compensation, rehabilitation, return to work, prevention",
                "Planning, implementation, evaluation, review, improvement",
            ],
            0,
            "The hierarchy prioritizes eliminating hazards first, then substitution, engineering controls, administrative controls, with PPE as last resort.",
        ),
        q(
            t,
            "What is the maximum recommended weight for manual lifting by one person?",
            ["5kg", "10kg", "20kg", "25kg"],
            3,
            "HSE guidelines suggest 25kg as a general guideline for men lifting at waist height, but individual capability and other factors must be considered.",
        ),
        q(
            t,
            "What does PUWER stand for?",
            [
                "Provision and Use of Work Equipment Regulations",
                "Power and Utility Work Equipment Requirements",
                "Personal Use of Workplace Equipment Rules",
                "Preventive Use of Work Equipment Regulations",
            ],
            0,
            "PUWER 1998 requires work equipment to be suitable, maintained, inspected, and used only by trained personnel, with adequate safety measures.",
        ),
        q(
            t,
            "What is the purpose of a method statement?",
            [
                "Detailed description of how potentially dangerous work will be carried out safely",
                "Statement of company health and safety policy",
                "Method for reporting accidents and incidents",
                "Statement of employee health and safety responsibilities",
            ],
            0,
            "Method statements describe the sequence of work, precautions, and control measures for high-risk activities, often accompanying risk assessments.",
        ),
        q(
            t,
            "What does LOLER regulate?",
            [
                "Lifting Operations and Lifting Equipment Regulations",
                "Licensing of Load Equipment Requirements",
                "Legal Operations and Load Equipment Rules",
                "Lifting Operations Licensing and Examination Regulations",
            ],
            0,
            "LOLER 1998 requires lifting equipment to be strong, stable, positioned safely, marked clearly, and thoroughly examined every 6-12 months.",
        ),
        q(
            t,
            "What is a 'competent person' in health and safety?",
            [
                "Person with sufficient training, experience and knowledge to perform health and safety duties",
                "Person appointed by management",
                "Person with health and safety qualification",
                "Person responsible for accident investigation",
            ],
            0,
            "A competent person has sufficient training, experience, knowledge, and other qualities to properly assist in health and safety matters.",
        ),
        q(
            t,
            "What are the main requirements of the Work at Height Regulations 2005?",
            [
                "Avoid work at height where possible, use appropriate equipment, ensure competence",
                "Always use harnesses, restrict access, conduct daily inspections",
                "Limit height to 2 meters, provide safety nets, supervise all work",
                "Require medical clearance, use certified equipment, maintain records",
            ],
            0,
            "The regulations require avoiding work at height where possible, using appropriate equipment, ensuring competence, and protecting those at risk.",
        ),
        q(
            t,
            "What is the purpose of a fire risk assessment?",
            [
                "Identify fire hazards and people at risk, evaluate and remove/reduce risks",
                "Calculate insurance requirements for fire damage",
                "Determine number and type of fire extinguishers needed",
                "Plan fire drill schedules and evacuation routes",
            ],
            0,
            "Required by the Regulatory Reform (Fire Safety) Order 2005, fire risk assessments identify hazards, evaluate risks, and implement control measures.",
        ),
        q(
            t,
            "What does COSHH regulate?",
            [
                "Control of Substances Hazardous to Health",
                "Classification of Safe Handling of Hazards",
                "Control of Safety and Health Hazards",
                "Chemical Operations Safety and Health Handling",
            ],
            0,
            "COSHH 2002 requires employers to control exposure to hazardous substances to prevent ill health through risk assessment and control measures.",
        ),
        q(
            t,
            "What is the purpose of a permit to work system?",
            [
                "Formal written system for controlling high-risk activities",
                "Permission for employees to work overtime",
                "Authorization to use specific equipment",
                "License to work in hazardous environments",
            ],
            0,
            "Permit to work systems ensure high-risk activities (like confined space entry) are properly planned, authorized, and controlled by competent persons.",
        ),
        q(
            t,
            "What are an employer's duties under the Display Screen Equipment Regulations?",
            [
                "Assess workstations, plan breaks, provide eye tests, provide training",
                "Provide ergonomic chairs, adjustable monitors, footrests, document holders",
                "Limit screen time, enforce rest periods, monitor usage, provide glasses",
                "Install anti-glare screens, provide wrist supports, conduct health checks",
            ],
            0,
            "The regulations require workstation assessments, adequate breaks, eye tests, and training for regular DSE users.",
        ),
        q(
            t,
            "What is a 'near miss'?",
            [
                "Incident with potential to cause harm but no injury occurred",
                "Minor injury requiring first aid only",
                "Accident that nearly caused serious injury",
                "Safety violation that was almost detected",
            ],
            0,
            "Near misses provide valuable learning opportunities to prevent future incidents and should be reported and investigated like accidents.",
        ),
        q(
            t,
            "What does the Manual Handling Operations Regulations require?",
            [
                "Avoid hazardous manual handling where possible, assess risks, reduce risks",
                "Provide mechanical aids for all lifting, train all staff, limit weights",
                "Require medical assessments, use team lifting, maintain records",
                "Prohibit lifting over 25kg, provide PPE, supervise all handling",
            ],
            0,
            "The regulations require avoiding hazardous manual handling where possible, assessing unavoidable risks, and reducing risks to lowest level.",
        ),
        q(
            t,
            "What is the purpose of a health and safety policy?",
            [
                "Statement of commitment and arrangements for managing health and safety",
                "List of safety rules and procedures for employees",
                "Document outlining legal requirements and penalties",
                "Plan for emergency response and business continuity",
            ],
            0,
            "Required for organisations with 5+ employees, the policy demonstrates commitment and outlines arrangements for managing health and safety.",
        ),
        q(
            t,
            "What are the key elements of fire safety management?",
            [
                "Fire prevention, means of escape, fire fighting equipment, training and drills",
                "Smoke detectors, sprinklers, fire doors, emergency lighting",
                "Risk assessment, equipment maintenance, staff training, emergency plans",
                "Alarm systems, evacuation procedures, assembly points, fire wardens",
            ],
            0,
            "Effective fire safety management includes prevention strategies, adequate means of escape, appropriate equipment, and regular training.",
        ),
        q(
            t,
            "What is the role of a safety representative?",
            [
                "Represent employees in health and safety matters, inspect workplace, investigate incidents",
                "Enforce safety rules, issue warnings, report violations",
                "Conduct risk assessments, develop procedures, deliver training",
                "Monitor compliance, audit systems, report to management",
            ],
            0,
            "Safety representatives (under SRSC Regulations 1977) represent employees, inspect workplaces, investigate incidents, and consult with employers.",
        ),
        q(
            t,
            "What does the Confined Spaces Regulations 1997 require?",
            [
                "Avoid entry where possible, follow safe system of work, have emergency arrangements",
                "Always use breathing apparatus, have rescue team on standby, monitor atmosphere",
                "Restrict entry to trained personnel, use permits, conduct risk assessments",
                "Provide ventilation, limit entry time, use safety harnesses, maintain communication",
            ],
            0,
            "The regulations require avoiding confined space entry where possible, following safe systems of work, and having adequate emergency arrangements.",
        ),
        q(
            t,
            "What is the purpose of personal protective equipment (PPE)?",
            [
                "Protect against risks that cannot be adequately controlled by other means",
                "Replace other control measures for convenience",
                "Comply with insurance requirements",
                "Standardize safety equipment across industries",
            ],
            0,
            "PPE should be last resort after other controls. The PPE Regulations 1992 require suitable PPE provision, maintenance, and training.",
        ),
        q(
            t,
            "What are an employer's first aid requirements?",
            [
                "Provide adequate and appropriate equipment, facilities and personnel",
                "Have at least one first aider per 50 employees, maintain first aid kits",
                "Provide first aid training to all staff, conduct regular drills",
                "Appoint a first aid coordinator, maintain records, review annually",
            ],
            0,
            "The Health and Safety (First-Aid) Regulations 1981 require adequate first aid provision based on workplace risk assessment.",
        ),
        q(
            t,
            "What is the purpose of a safety committee?",
            [
                "Promote cooperation between employers and employees on health and safety",
                "Enforce safety policies, review incidents, recommend disciplinary action",
                "Develop safety procedures, conduct audits, report to management",
                "Coordinate emergency response, organize training, maintain equipment",
            ],
            0,
            "Safety committees facilitate consultation between employers and employees on health and safety matters, required for workplaces with recognized unions.",
        ),
        q(
            t,
            "What does the Control of Asbestos Regulations 2012 require?",
            [
                "Manage asbestos in non-domestic premises, prevent exposure, provide information",
                "Remove all asbestos immediately, use licensed contractors, notify HSE",
                "Label asbestos materials, restrict access, conduct air monitoring",
                "Register asbestos locations, train maintenance staff, maintain records",
            ],
            0,
            "The regulations require duty holders to manage asbestos in non-domestic premises, prevent exposure, and provide information to those at risk.",
        ),
        q(
            t,
            "What is the purpose of a noise risk assessment?",
            [
                "Identify employees at risk from noise and implement control measures",
                "Measure noise levels, provide hearing protection, conduct audiometry",
                "Document noise exposure, train employees, maintain equipment",
                "Comply with legal limits, reduce noise at source, monitor exposure",
            ],
            0,
            "Required by the Control of Noise at Work Regulations 2005 when daily exposure exceeds 80dB, to identify risks and implement controls.",
        ),
        q(
            t,
            "What are the main requirements for workplace ventilation?",
            [
                "Provide sufficient fresh or purified air, control temperature, remove contaminants",
                "Maintain 21°C temperature, provide air conditioning, filter air",
                "Ensure windows open, use extract fans, monitor air quality",
                "Prevent drafts, control humidity, clean ventilation systems",
            ],
            0,
            "The Workplace (Health, Safety and Welfare) Regulations 1992 require effective ventilation providing sufficient fresh or purified air.",
        ),
        q(
            t,
            "What is the purpose of a construction phase plan?",
            [
                "Plan and manage health and safety risks during construction work",
                "Schedule construction activities, coordinate contractors, track progress",
                "Document safety procedures, list emergency contacts, record inspections",
                "Allocate responsibilities, specify equipment, define work methods",
            ],
            0,
            "Required by CDM 2015, the plan sets out health and safety arrangements for construction projects, prepared by the principal contractor.",
        ),
        q(
            t,
            "What does the Electricity at Work Regulations 1989 require?",
            [
                "Ensure electrical systems are constructed and maintained to prevent danger",
                "Use qualified electricians, conduct periodic testing, maintain records",
                "Provide circuit protection, ground all equipment, use low voltage",
                "Label electrical hazards, restrict access, provide training",
            ],
            0,
            "The regulations require electrical systems to be constructed and maintained to prevent danger, with work on or near live conductors avoided where possible.",
        ),
        q(
            t,
            "What is the purpose of a young persons risk assessment?",
            [
                "Consider specific risks to young workers and implement additional protections",
                "Restrict young workers from hazardous tasks, provide extra supervision",
                "Assess maturity and competence, provide mentoring, limit working hours",
                "Require parental consent, conduct medical assessments, provide training",
            ],
            0,
            "Required by Management Regulations, considering young workers' lack of experience, awareness of risks, and physical/psychological immaturity.",
        ),
        q(
            t,
            "What are the main duties of designers under CDM 2015?",
            [
                "Eliminate, reduce or control foreseeable risks through design",
                "Create detailed drawings, specify materials, coordinate with engineers",
                "Consider buildability, minimize waste, optimize costs",
                "Ensure aesthetic appeal, functionality, sustainability",
            ],
            0,
            "Designers must eliminate foreseeable health and safety risks to those constructing, maintaining, using, or demolishing the structure.",
        ),
    ]
}
