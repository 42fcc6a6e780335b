//! Fire safety bank — UK workplace fire regulations, equipment, and evacuation.

use super::q;
use crate::content_engine::models::{QuestionRecord, Topic};

pub fn questions() -> Vec<QuestionRecord> {
    let t = Topic::FireSafety;
    vec![
        q(
            t,
            "What is the primary purpose of a fire risk assessment?",
            [
                "To identify potential fire hazards and people at risk",
                "To calculate insurance costs",
                "To plan office layouts",
                "To schedule fire drills",
            ],
            0,
            "Fire risk assessments systematically identify fire hazards, evaluate risks, and implement control measures to protect people and property. It's a legal requirement under the Regulatory Reform (Fire Safety) Order 2005.",
        ),
        q(
            t,
            "Which class of fire involves flammable liquids like petrol?",
            ["Class A", "Class B", "Class C", "Class D"],
            1,
            "Class B fires involve flammable liquids. Water extinguishers should NOT be used as they can spread the fire. Use foam, powder, or CO2 extinguishers instead.",
        ),
        q(
            t,
            "What does RACE stand for in fire emergency procedures?",
            [
                "Rescue, Alert, Contain, Evacuate",
                "Remove, Alarm, Confine, Exit",
                "Respond, Announce, Control, Escape",
                "Recognise, Activate, Call, Evacuate",
            ],
            0,
            "RACE: Rescue anyone in danger, Alert by activating alarm, Contain fire by closing doors, Evacuate safely. This protocol is taught in all UK fire safety training.",
        ),
        q(
            t,
            "How often should fire extinguishers be professionally inspected?",
            ["Monthly", "Every 6 months", "Annually", "Every 2 years"],
            2,
            "UK regulations require annual professional inspection by a competent person, with monthly visual checks by staff. BS 5306-3:2017 provides detailed guidance.",
        ),
        q(
            t,
            "What is the minimum width for fire escape routes in offices?",
            ["750mm", "1000mm", "1200mm", "1500mm"],
            1,
            "Fire escape routes must be at least 1000mm wide to allow safe evacuation of wheelchair users and people with mobility aids, following Approved Document B.",
        ),
        q(
            t,
            "Which fire extinguisher is suitable for electrical fires?",
            ["Water", "Foam", "CO2", "Wet chemical"],
            2,
            "CO2 extinguishers are safe for electrical fires as they don't conduct electricity and leave no residue. Never use water on electrical fires!",
        ),
        q(
            t,
            "What is the 'two out, all out' rule in fire evacuation?",
            [
                "Two alarms mean everyone must evacuate",
                "Two people must check the fire before evacuation",
                "Two exits must be used for evacuation",
                "Two minutes is the maximum evacuation time",
            ],
            0,
            "The 'two out, all out' rule means if two fire alarms sound, everyone must evacuate immediately regardless of location or floor.",
        ),
        q(
            t,
            "What does ALARP stand for in fire safety management?",
            [
                "As Low As Reasonably Practicable",
                "All Leave Area Rapidly Procedure",
                "Alert Level Assessment and Response Protocol",
                "Automatic Lockdown and Rescue Process",
            ],
            0,
            "ALARP (As Low As Reasonably Practicable) is a key principle in UK health and safety law, requiring risks to be reduced to the lowest level reasonably achievable.",
        ),
        q(
            t,
            "How many fire drills should be conducted annually in a workplace?",
            ["At least 1", "At least 2", "At least 4", "At least 6"],
            1,
            "The Regulatory Reform (Fire Safety) Order 2005 recommends at least one drill annually, but high-risk workplaces should conduct more frequent drills.",
        ),
        q(
            t,
            "What is the maximum distance to a fire extinguisher in most workplaces?",
            ["15 meters", "25 meters", "30 meters", "45 meters"],
            2,
            "BS 5306 recommends fire extinguishers should be no more than 30 meters from any point in low-risk areas. High-risk areas require closer spacing.",
        ),
        q(
            t,
            "Which of these is NOT a common cause of workplace fires?",
            [
                "Faulty electrical equipment",
                "Poor housekeeping",
                "Natural sunlight",
                "Hot work activities",
            ],
            2,
            "While sunlight through glass can start fires (magnifying effect), it's not among the top causes which are electrical faults, arson, and cooking equipment.",
        ),
        q(
            t,
            "What does PASS stand for when using a fire extinguisher?",
            [
                "Pull, Aim, Squeeze, Sweep",
                "Point, Activate, Spray, Stop",
                "Press, Align, Shoot, Swing",
                "Prepare, Assess, Shoot, Secure",
            ],
            0,
            "PASS: Pull the pin, Aim at base of fire, Squeeze handle, Sweep side to side. This technique is taught in all basic fire safety training.",
        ),
        q(
            t,
            "How long should fire doors resist fire (FD30 rating)?",
            ["15 minutes", "30 minutes", "60 minutes", "90 minutes"],
            1,
            "Most fire doors are rated for 30 minutes (FD30). Critical areas may require 60 (FD60) or 90-minute (FD90) doors as specified in BS 476-22.",
        ),
        q(
            t,
            "What percentage of workplace fires are caused by electrical faults?",
            ["15%", "25%", "35%", "45%"],
            1,
            "Electrical faults cause approximately 25% of workplace fires, making regular PAT testing and electrical safety checks essential for compliance.",
        ),
        q(
            t,
            "Which material is most fire-resistant?",
            ["Plywood", "Gypsum board", "MDF", "Particle board"],
            1,
            "Gypsum board (drywall) contains water in its crystal structure which evaporates under heat, slowing fire spread and providing up to 2 hours fire resistance.",
        ),
        q(
            t,
            "What is flashover?",
            [
                "When all combustible materials simultaneously ignite",
                "When a fire jumps between buildings",
                "When extinguishers flash during use",
                "When smoke changes colour rapidly",
            ],
            0,
            "Flashover occurs when radiant heat causes all combustible materials in a room to ignite simultaneously - extremely dangerous for firefighters.",
        ),
        q(
            t,
            "Which fire safety sign indicates a fire assembly point?",
            ["Blue circle", "Green rectangle", "Red square", "Yellow triangle"],
            1,
            "Green rectangular signs with white pictograms indicate safe condition information like assembly points, following BS 5499 standards.",
        ),
        q(
            t,
            "What is the recommended maximum occupancy for a room with one exit?",
            ["25 people", "50 people", "60 people", "75 people"],
            2,
            "Building regulations typically limit single-exit rooms to 60 people to ensure safe evacuation times of less than 2.5 minutes.",
        ),
        q(
            t,
            "Which gas is most commonly used in fire suppression systems for server rooms?",
            ["Carbon dioxide", "Nitrogen", "Inergen", "FM-200"],
            3,
            "FM-200 (heptafluoropropane) is clean, leaves no residue, and is safe for occupied spaces with electronic equipment, with zero ozone depletion potential.",
        ),
        q(
            t,
            "How often should emergency lighting be tested?",
            ["Monthly", "Quarterly", "Annually", "Every 3 years"],
            0,
            "BS 5266 requires monthly functional tests (30 seconds) and annual duration tests (3 hours) of emergency lighting systems.",
        ),
        q(
            t,
            "What is the typical activation temperature of a standard sprinkler head?",
            ["57°C", "68°C", "79°C", "93°C"],
            1,
            "Most sprinklers activate at 68°C. Different colour bulbs indicate different temperature ratings: orange (57°C), red (68°C), yellow (79°C), green (93°C).",
        ),
        q(
            t,
            "What does the term 'means of escape' refer to in fire safety?",
            [
                "All possible exits from a building",
                "Structural protection provided by fire doors",
                "Safe route from any point to a place of safety",
                "Emergency communication systems",
            ],
            2,
            "'Means of escape' refers to the safe route from any point in a building to a place of safety, considering travel distance, exit widths, and fire protection.",
        ),
        q(
            t,
            "What is the maximum travel distance to a fire exit in an office building?",
            ["18 meters", "25 meters", "45 meters", "60 meters"],
            2,
            "For single direction escape routes in offices, maximum travel distance is 18m in high risk, 25m in normal risk, and 45m in low risk areas.",
        ),
        q(
            t,
            "Which regulation requires employers to appoint a 'responsible person' for fire safety?",
            [
                "Health and Safety at Work Act 1974",
                "Regulatory Reform (Fire Safety) Order 2005",
                "Building Regulations 2010",
                "Management of Health and Safety at Work Regulations 1999",
            ],
            1,
            "The Regulatory Reform (Fire Safety) Order 2005 requires employers to appoint a 'responsible person' to ensure fire safety compliance.",
        ),
        q(
            t,
            "What is the purpose of a fire damper in HVAC systems?",
            [
                "To control temperature during fires",
                "To prevent smoke spread through ductwork",
                "To increase ventilation during evacuation",
                "To detect fire in air handling units",
            ],
            1,
            "Fire dampers automatically close to prevent smoke and fire spread through HVAC ductwork, typically activated by fusible links at 72°C.",
        ),
        q(
            t,
            "What does 'compartmentation' achieve in building fire safety?",
            [
                "Divides building into fire-resistant compartments",
                "Groups fire safety equipment together",
                "Separates fire wardens by floor",
                "Organizes evacuation procedures",
            ],
            0,
            "Compartmentation divides buildings into fire-resistant compartments using fire-rated walls, floors, and doors to contain fire spread for specified periods.",
        ),
        q(
            t,
            "How often should fire alarm systems be tested?",
            ["Weekly", "Monthly", "Quarterly", "Annually"],
            0,
            "BS 5839 requires fire alarm systems to be tested weekly with different call points each week, and maintained by a competent person every 6 months.",
        ),
        q(
            t,
            "What is the purpose of intumescent strips on fire doors?",
            [
                "To provide sound insulation",
                "To expand and seal gaps when heated",
                "To indicate door temperature",
                "To make doors easier to open",
            ],
            1,
            "Intumescent strips expand up to 50 times their volume when heated to 120-200°C, sealing gaps around fire doors to prevent smoke spread.",
        ),
        q(
            t,
            "What does 'stay put' policy mean in high-rise buildings?",
            [
                "Stay in your flat unless directly affected by fire",
                "Stay put until firefighters arrive",
                "Stay where you are during alarm testing",
                "Stay put during initial fire development",
            ],
            0,
            "'Stay put' policy: residents stay in their flats unless directly affected by fire, relying on compartmentation. This is under review post-Grenfell.",
        ),
        q(
            t,
            "What is the minimum fire resistance for structural steel in commercial buildings?",
            ["30 minutes", "60 minutes", "90 minutes", "120 minutes"],
            2,
            "Structural steel in commercial buildings typically requires 90 minutes fire resistance, achieved through intumescent coatings, concrete encasement, or boarding systems.",
        ),
    ]
}
