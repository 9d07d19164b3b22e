use super::super::domain::{ChoiceOption, Dimension, InputKind, Question, ScoreRule, Stage};

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1",
            text: "Nombre del proyecto",
            kind: InputKind::Text,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Escriba el nombre del proyecto que está evaluando."),
            options: Vec::new(),
            contributes: false,
            scoring: ScoreRule::Unscored,
        },
        Question {
            id: "q2",
            text: "Descripción del proyecto",
            kind: InputKind::LongText,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Describa brevemente el proyecto que está evaluando."),
            options: Vec::new(),
            contributes: false,
            scoring: ScoreRule::Unscored,
        },
        Question {
            id: "q3",
            text: "Fase Actual",
            kind: InputKind::Select,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Elija una opción entre: conceptualización y diseño, uso y monitoreo, recolección y procesamiento de datos."),
            options: vec![
                ChoiceOption {
                    value: "conceptualizacion",
                    label: "Conceptualización y diseño",
                    score: None,
                },
                ChoiceOption {
                    value: "recoleccion",
                    label: "Recolección y procesamiento de datos",
                    score: None,
                },
                ChoiceOption {
                    value: "uso",
                    label: "Uso y monitoreo",
                    score: None,
                },
            ],
            contributes: false,
            scoring: ScoreRule::Unscored,
        },
        Question {
            id: "q4",
            text: "Razones para la automatización de este proceso.",
            kind: InputKind::MultiSelect,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Indique las principales razones para la automatización de este proceso de toma de decisiones"),
            options: vec![
                ChoiceOption {
                    value: "Utilizar enfoques innovadores",
                    label: "Utilizar enfoques innovadores",
                    score: None,
                },
                ChoiceOption {
                    value: "El sistema realiza tareas que los humanos no podrían realizar en un periodo de tiempo razonable",
                    label: "El sistema realiza tareas que los humanos no podrían realizar en un periodo de tiempo razonable",
                    score: None,
                },
                ChoiceOption {
                    value: "Reducción de los costos de un programa existente",
                    label: "Reducción de los costos de un programa existente",
                    score: None,
                },
                ChoiceOption {
                    value: "Mejorar la calidad general de las decisiones",
                    label: "Mejorar la calidad general de las decisiones",
                    score: None,
                },
            ],
            contributes: false,
            scoring: ScoreRule::Unscored,
        },
        Question {
            id: "q5",
            text: "¿Es este proyecto una ampliación o adaptación de algún proyecto existente?",
            kind: InputKind::YesNo,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.3),
        },
        Question {
            id: "q6",
            text: "¿El sistema de IA, incluido el modelo central, se basa en un modelo ya existente?",
            kind: InputKind::YesNo,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Por ejemplo, tu sistema usa o implementa BERT, ChatGPT, etc."),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.3),
        },
        Question {
            id: "q7",
            text: "¿Ha documentado con claridad la descripción del problema que busca resolver?",
            kind: InputKind::YesNo,
            dimension: Dimension::General,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.3),
        },
        Question {
            id: "q8",
            text: "¿Se ha considerado detenidamente las opciones no algorítmicas que pueden utilizarse para lograr el mismo objetivo?",
            kind: InputKind::YesNo,
            dimension: Dimension::Proportionality,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.3),
        },
        Question {
            id: "q9",
            text: "¿Por qué se favorece la opción que implica un sistema basado en algoritmos?",
            kind: InputKind::Select,
            dimension: Dimension::Proportionality,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: vec![
                ChoiceOption {
                    value: "Utilizar enfoques innovadores",
                    label: "Utilizar enfoques innovadores",
                    score: Some(1.3),
                },
                ChoiceOption {
                    value: "El sistema realiza tareas que los humanos no podrían realizar en un periodo de tiempo razonable",
                    label: "El sistema realiza tareas que los humanos no podrían realizar en un periodo de tiempo razonable",
                    score: Some(1.3),
                },
                ChoiceOption {
                    value: "Reducción de los costos de un programa existente",
                    label: "Reducción de los costos de un programa existente",
                    score: Some(1.3),
                },
                ChoiceOption {
                    value: "Mejorar la calidad general de las decisiones",
                    label: "Mejorar la calidad general de las decisiones",
                    score: Some(1.3),
                },
            ],
            contributes: true,
            scoring: ScoreRule::PerOption,
        },
        Question {
            id: "q10",
            text: "¿Ha revisado casos similares y sus impactos?",
            kind: InputKind::YesNo,
            dimension: Dimension::Proportionality,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Puedes revisar casos similares en algorítmicospublicos.cl"),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.3),
        },
        Question {
            id: "q11",
            text: "¿Son los impactos que ha identificado reversibles?",
            kind: InputKind::YesNo,
            dimension: Dimension::Proportionality,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.3),
        },
        Question {
            id: "q12",
            text: "¿La aplicación del sistema tiene algún impacto en derechos humanos según la constitución?",
            kind: InputKind::YesNo,
            dimension: Dimension::Proportionality,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Por ejemplo, impácto en Derecho a la educación, salud, propiedad, la privacidad, libertad de expresión o debido proceso,medio ambiente o los que se establecen en el articulo 19 de la constitución"),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.3),
        },
        Question {
            id: "q13",
            text: "¿Se implementa el algoritmo para la ejecución de una normativa específica?",
            kind: InputKind::YesNo,
            dimension: Dimension::Regulatory,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(5.55),
        },
        Question {
            id: "q14",
            text: "¿Has identificado las normativas que pueden impactar en el sistema y el proyecto en el que se inserta?",
            kind: InputKind::YesNo,
            dimension: Dimension::Regulatory,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(5.55),
        },
        Question {
            id: "q15",
            text: "¿El proyecto y/o sus objetivos están relacionados con temas de intenso debate público que podrían generar judicialización o peticiones administrativas?",
            kind: InputKind::YesNo,
            dimension: Dimension::SocialLicense,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(2.77),
        },
        Question {
            id: "q16",
            text: "¿Se han diseñado mecanismos de participación ciudadana para recibir retroalimentación del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::SocialLicense,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Tales como correo electrónico, formulario de sugerencias, consultas publicas antes de la implementación"),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(2.77),
        },
        Question {
            id: "q17",
            text: "¿Se han diseñado mecanismos para la difusión del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::SocialLicense,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(2.77),
        },
        Question {
            id: "q18",
            text: "¿Existen recursos monetarios (presupuesto) del proyecto para ejecutar los mecanismos de participación?",
            kind: InputKind::YesNo,
            dimension: Dimension::SocialLicense,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(2.77),
        },
        Question {
            id: "q19",
            text: "¿Existe alguna unidad interna encargada de supervisar la gobernanza (operación, manejo, despliegue) de la solución desarrollada?",
            kind: InputKind::YesNo,
            dimension: Dimension::Governance,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(2.22),
        },
        Question {
            id: "q20",
            text: "¿El equipo de desarrollo interno estará compuesto por un grupo diverso de personas en términos de raza, género, profesiones, edades  y otros criterios sociodemográficos?",
            kind: InputKind::YesNo,
            dimension: Dimension::Governance,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(2.22),
        },
        Question {
            id: "q21",
            text: "¿Está documentado el proceso de toma de decisiones del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::Governance,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(2.22),
        },
        Question {
            id: "q22",
            text: "¿Están todas las contrapartes internas identificadas?",
            kind: InputKind::YesNo,
            dimension: Dimension::Governance,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(2.22),
        },
        Question {
            id: "q23",
            text: "¿Están todas las contrapartes internas involucradas en el proyecto?",
            kind: InputKind::YesNo,
            dimension: Dimension::Governance,
            stage: Stage::ConceptualizationAndDesign,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(2.22),
        },
        Question {
            id: "q24",
            text: "¿Utilizará el sistema datos personales como datos de entrada para la toma de decisiones automatizadas?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::ConceptualizationAndDesign,
            help: Some("Dato personal: cualquier información vinculada o referida a una persona natural identificada o identificable. Se considerará identificable toda persona cuya identidad pueda determinarse, directa o indirectamente, en particular mediante uno o más identificadores, tales como el nombre, el número de cédula de identidad, el análisis de elementos propios de la identidad física, fisiológica, genética, psíquica, económica, cultural o social de dicha persona. Para determinar si una persona es identificable deberán considerarse todos los medios y factores objetivos que razonablemente se podrían usar para dicha identificación en el momento del tratamiento"),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q25",
            text: "¿El sistema utilizará datos personales sensibles o especialmente protegidos?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: Some("Datos personales sensibles: tendrán esta condición aquellos datos personales que se refieren a las características físicas o morales de las personas o a hechos o circunstancias de su vida privada o intimidad, que revelen el origen étnico o racial, la afiliación política, sindical o gremial, situación socioeconómica, las convicciones ideológicas o filosóficas, las creencias religiosas, los datos relativos a la salud, al perfil biológico humano, los datos biométricos, y la información relativa a la vida sexual, a la orientación sexual y a la identidad de género de una persona natural."),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q26",
            text: "¿El sistema utilizará los datos personales para tomar decisiones que afecten directamente a las mismas personas titulares de dichos datos?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q27",
            text: "¿Los datos son recogidos por sensores automatizados?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q28",
            text: "Si los datos provienen de entidades externas, ¿existen acuerdos escritos detallando las condiciones para el acceso a datos?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q29",
            text: "¿Se aplica el principio de minimización de datos?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: Some("En otras palabras, ¿existe una evaluación ex ante en cuanto a la pertinencia y necesidad de incluir cada uno de los tipos de datos en el sistema?"),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.01),
        },
        Question {
            id: "q30",
            text: "¿Se anonimizan o seudonimizan los datos para el entrenamiento y prueba del sistema de IA?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.01),
        },
        Question {
            id: "q31",
            text: "Se implementará el sistema para algunos de estos usos o casos:  \na) Evaluación sistemática y exhaustiva de aspectos personales de los titulares de datos, basadas en tratamiento o decisiones automatizadas, como la elaboración de perfiles, y que produzcan en ellos efectos jurídicos significativos. \nb) Tratamiento masivo de datos o gran escala. \nc) Tratamiento que implique observación o monitoreo sistemático de una zona de acceso público. \nd) Tratamiento de datos sensibles y especialmente protegidos, en las hipótesis de excepción del consentimiento.",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q32",
            text: "Cuenta la entidad con procesos espablecidos para el ejercicio de los derechos vinculados a los datos: Acceso, Rectificación, Supresión, Opocisión, Portabilidad e Impugnación a las decisiones automatizadas?",
            kind: InputKind::Select,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: vec![
                ChoiceOption {
                    value: "Si",
                    label: "Sí",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Si, pero parcialmente",
                    label: "SI, pero solo parcialmente ( Acceso, Rectificación, Supresión, Opocisión)",
                    score: Some(0.5),
                },
                ChoiceOption {
                    value: "No",
                    label: "No",
                    score: Some(1.01),
                },
            ],
            contributes: true,
            scoring: ScoreRule::PerOption,
        },
        Question {
            id: "q33",
            text: "¿El sistema implica toma de decisiones automatizadas, incluida la elaboración de perfiles, que afecten signifcativamente a los titulares de datos, esto es, por ejemplo, en la negación de un beneficio, la asistencia sanitaria, evaluación de beneficios, acceso a servicios públicos, resolución de controversias, etc?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.01),
        },
        Question {
            id: "q34",
            text: "¿Se han diseñado medidas necesarias para asegurar  explicaciones adecuadas para ayudar a los usuarios y otras personas afectadas a comprender el proceso de toma de decisiones o el funcionamiento del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::DataProtection,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.01),
        },
        Question {
            id: "q35",
            text: "¿Forma parte su organización de la administración del Estado ( Ministerios, las Delegaciones Presidenciales Regionales y  Provinciales, los Gobiernos Regionales, las Municipalidades, las Fuerzas Armadas, las Fuerzas de Orden y Seguridad Pública, las empresas públicas creadas por ley, y los órganos y servicios públicos creados para el cumplimiento de la función administrativa) o empresa del Estado en que éste tenga participación accionaria superior al 50% o mayoría en el directorio?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q36",
            text: "¿Su organización presta servicios mediante redes y sistemas informáticos, y su afectación, interceptación, interrupción o destrucción tendría un impacto significativo en la seguridad y el orden público, en la provisión continua y regular de sus servicios, en el efectivo cumplimiento de las funciones del Estado o, en general, de los servicios que éste debe proveer o garantizar?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q37",
            text: "¿Posee su organización una política de seguridad de la información o ciberseguridad?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q37.1",
            text: "El sistema está siendo desarrollado por un tercero?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q38",
            text: "¿Ha implementado un sistema de gestión de seguridad de la información continuo con el fin de determinar aquellos riesgos que puedan afectar la seguridad de las redes, sistemas informáticos y datos, y la continuidad operacional del servicio?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q39",
            text: "¿Ha evaluado los riesgos de ciberseguridad particulares que afectan a los sistemas de IA que gestiona la organización?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q39.1",
            text: "¿Ha evaluado los riesgos específicos de ciberseguridad que pueda afectar el funcionamiento del sistema algorítmico implementado?",
            kind: InputKind::YesNo,
            dimension: Dimension::Cybersecurity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q40",
            text: "Utiliza el sistema datos que representen algunas de estas características: la raza o etnia, la nacionalidad, la situación socioeconómica, el idioma, la ideología u opinión política, la religión o creencia, la sindicación o participación en organizaciones gremiales o la falta de ellas, el estado civil, la edad, la filiación o información sobre  la enfermedades o discapacidades.",
            kind: InputKind::YesNo,
            dimension: Dimension::Equity,
            stage: Stage::DataCollectionAndProcessing,
            help: Some("La ley chilena prohíbe la discriminación arbitraria, esto toda distinción, exclusión o restricción que carezca de justificación razonable, efectuada por agentes del Estado o particulares, en particular cuando se funden en motivos tales como la raza o etnia, la nacionalidad, la situación socioeconómica, el idioma, la ideología u opinión política, la religión o creencia, la sindicación o participación en organizaciones gremiales o la falta de ellas, el sexo, género, la maternidad, la lactancia materna, el amamantamiento, la orientación sexual, la identidad y expresión de género, el estado civil, la edad, la filiación, la apariencia personal y la enfermedad o discapacidad."),
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(2.22),
        },
        Question {
            id: "q41",
            text: "¿La ley lo obliga a fundar sus decisiones en alguna de las características descritas anteriormente?",
            kind: InputKind::YesNo,
            dimension: Dimension::Equity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(2.22),
        },
        Question {
            id: "q42",
            text: "¿El sistema utilizará datos de varias bases de datos o fuentes diferentes?",
            kind: InputKind::YesNo,
            dimension: Dimension::Equity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(2.22),
        },
        Question {
            id: "q43",
            text: "¿El algoritmo fue desarrollado originalmente fuera de Chile o para un contexto distinto al propuesto?",
            kind: InputKind::YesNo,
            dimension: Dimension::Equity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(2.22),
        },
        Question {
            id: "q44",
            text: "¿Está planificado realizar un análisis exploratorio inicial de los datos para evaluar la calidad, integridad, temporalidad, consistencia y posibles sesgos, daños potenciales e implicaciones de su uso?",
            kind: InputKind::YesNo,
            dimension: Dimension::Equity,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(2.22),
        },
        Question {
            id: "q45",
            text: "¿El algoritmo participa de una decisión que forma parte de un proceso administrativo?",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(1.58),
        },
        Question {
            id: "q46",
            text: "Se enmarca el sistema en alguna de estas finalidades:  las áreas de educación, empleo, servicios básicos, subsidios y ayuda económica, capacitación laboral,  salud, seguridad pública, vivienda, protección social, autorizaciones o permisos administrativos.",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q47",
            text: "¿Saben las personas que la decisión está mediada por un sistema de IA o algoritmos de IA o tomada sobre la base de los mismos?",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q48",
            text: "¿Existe una imposibilidad técnica real, conforme con el estado del arte, y derivada, por ejemplo, de sistemas de decisiones automatizadas o semiautomatizadas basados en sistemas de aprendizaje automático (cajas negras), de entregar información respecto del funcionamiento y resultados del algoritmo?",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q49",
            text: "¿El algoritmo estará protegido por derechos de propiedad intelectual de terceros desarrolladores?",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(1.58),
        },
        Question {
            id: "q50",
            text: "¿Será exigida la entrega de Código fuente al tercero desarrollador?",
            kind: InputKind::YesNoNotApplicable,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.58),
        },
        Question {
            id: "q51",
            text: "¿Has considerado algún mecanismo para que las partes interesadas se comuniquen con la institución por los efectos o impactos que pueda producir el sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::Transparency,
            stage: Stage::DataCollectionAndProcessing,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.58),
        },
        Question {
            id: "q52",
            text: "Indique las principales características del sistema a desarrollar",
            kind: InputKind::Select,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: Some("Para entender las clasificaciones, visite la guía permitido innovar en el siguiente enlace: https://www.lab.gob.cl/permitido-innovar"),
            options: vec![
                ChoiceOption {
                    value: "Sistemas de reconocimiento y de detección de eventos",
                    label: "Sistemas de reconocimiento y de detección de eventos",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Predicción",
                    label: "Predicción",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Personalización",
                    label: "Personalización",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Soporte de interacción",
                    label: "Soporte de interacción",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Optimización",
                    label: "Optimización",
                    score: Some(0.0),
                },
                ChoiceOption {
                    value: "Razonamiento con estructuras de conocimiento",
                    label: "Razonamiento con estructuras de conocimiento",
                    score: Some(0.0),
                },
            ],
            contributes: false,
            scoring: ScoreRule::Unscored,
        },
        Question {
            id: "q53",
            text: "¿El sistema automatizado va a ser utilizado reemplazando la toma de decisiones?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenYes(1.38),
        },
        Question {
            id: "q54",
            text: "¿El sistema está completamente automatizado?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(1.38),
        },
        Question {
            id: "q55",
            text: "¿Se proporciona un mecanismo para obtener retroalimentación de los usuarios durante la operación del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.38),
        },
        Question {
            id: "q56",
            text: "¿Están planificadas auditorías algorítmicas?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.38),
        },
        Question {
            id: "q57",
            text: "¿Existe presupuesto para la realización de dichas auditorias algorítmicas?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.38),
        },
        Question {
            id: "q58",
            text: "¿Existe algún diseño para atender requerimientos de información de usuarios externos respecto del sistema?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::WhenNo(1.38),
        },
        Question {
            id: "q59",
            text: "¿Se ha planificado  el resguardo de documentación tecnica, minutas de reuniones, actas y en general de la documentación que vaya justificando las decisiones que se adopten en el proyecto?",
            kind: InputKind::YesNo,
            dimension: Dimension::Accountability,
            stage: Stage::UseAndMonitoring,
            help: None,
            options: Vec::new(),
            contributes: true,
            scoring: ScoreRule::EitherWay(1.38),
        },
    ]
}
